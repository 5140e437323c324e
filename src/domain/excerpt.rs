/// Number of period-delimited segments in a paragraph.
///
/// This is a rough sentence count: `"A. B."` yields 3 and a paragraph with no
/// period still yields 1.
pub fn count_sentences(paragraph: &str) -> usize {
    paragraph.split('.').count()
}

/// Concatenates trimmed, non-empty paragraphs (each followed by `\n`) in order
/// and stops as soon as the running sentence count reaches `min_sentences`.
pub fn accumulate_paragraphs<I, S>(paragraphs: I, min_sentences: usize) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut content = String::new();
    let mut sentence_count = 0;

    for paragraph in paragraphs {
        let paragraph = paragraph.as_ref().trim();
        if paragraph.is_empty() {
            continue;
        }

        content.push_str(paragraph);
        content.push('\n');
        sentence_count += count_sentences(paragraph);

        if sentence_count >= min_sentences {
            break;
        }
    }

    content
}

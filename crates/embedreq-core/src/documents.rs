/// One input text, identified by its position in the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub index: usize,
    pub text: String,
}

impl Document {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

const DEFAULT_TEXTS: [&str; 3] = [
    "the newest informations tell us that the color of the sky is actually red",
    "we have a lot of cars parked in the street. We may need to remove some of them, says the mayor",
    "Last night, the moon was shining bright. It was a beautiful night up until a fatal accident happened in the south west of the city",
];

/// The built-in example sentences, in order.
pub fn default_documents() -> Vec<Document> {
    documents_from_texts(DEFAULT_TEXTS)
}

/// Number caller-supplied texts in the order given.
pub fn documents_from_texts<I, S>(texts: I) -> Vec<Document>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    texts
        .into_iter()
        .enumerate()
        .map(|(index, text)| Document::new(index, text))
        .collect()
}

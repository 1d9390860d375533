use crate::domain::traits::TitleFolder;

pub struct DefaultTitleFolder;

impl TitleFolder for DefaultTitleFolder {
    /// Exact title up to case; trailing whitespace is ignored.
    fn fold(&self, title: &str) -> String {
        title.trim_end().to_lowercase()
    }

    /// MediaWiki stores titles with '_' where readers type ' ', and pasted
    /// titles often carry leading blanks.
    fn fold_loose(&self, title: &str) -> String {
        title
            .chars()
            .map(|ch| if ch == '_' { ' ' } else { ch })
            .collect::<String>()
            .trim()
            .to_lowercase()
    }
}

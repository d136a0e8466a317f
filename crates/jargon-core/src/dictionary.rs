use std::sync::Arc;

/// Canonical forms for runs of words
pub trait Dictionary: Send + Sync {
    /// Canonical spelling for the word run, `None` when the run is not a known term.
    ///
    /// Must not depend on anything but `words`; the lemmatizer calls it with
    /// the same run at several lengths.
    fn lookup(&self, words: &[String]) -> Option<String>;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn lookup(&self, words: &[String]) -> Option<String> {
        (**self).lookup(words)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn lookup(&self, words: &[String]) -> Option<String> {
        (**self).lookup(words)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Arc<D> {
    fn lookup(&self, words: &[String]) -> Option<String> {
        (**self).lookup(words)
    }
}

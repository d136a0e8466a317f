/// The words of one n-gram attempt, up to a fixed capacity.
///
/// Slots keep their string allocations across `clear`.
#[derive(Debug)]
pub struct WordRun {
    words: Vec<String>,
    len: usize,
    capacity: usize,
}

impl WordRun {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            words: Vec::with_capacity(capacity),
            len: 0,
            capacity,
        }
    }

    pub fn push(&mut self, word: &str) {
        debug_assert!(self.len < self.capacity, "word run is full");

        match self.words.get_mut(self.len) {
            Some(slot) => {
                slot.clear();
                slot.push_str(word);
            }
            None => self.words.push(word.to_owned()),
        }
        self.len += 1;
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Only the words of the current attempt
    pub fn words(&self) -> &[String] {
        &self.words[..self.len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_hides_stale_words() {
        let mut run = WordRun::with_capacity(3);
        run.push("ruby");
        run.push("on");
        run.push("rails");
        assert_eq!(run.words(), ["ruby", "on", "rails"]);

        run.clear();
        assert!(run.is_empty());
        run.push("java");
        assert_eq!(run.words(), ["java"]);
        assert_eq!(run.len(), 1);
    }
}

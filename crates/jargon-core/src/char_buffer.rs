const INITIAL_CAPACITY: usize = 8;
const LINEAR_GROWTH: usize = 4096;

/// Accumulates the scalars of the token being scanned.
///
/// Capacity doubles up to 4 KiB and grows linearly after that. `reset` keeps the allocation.
#[derive(Debug, Default)]
pub struct CharBuffer {
    buf: String,
    scalars: usize,
}

impl CharBuffer {
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(INITIAL_CAPACITY),
            scalars: 0,
        }
    }

    pub fn append(&mut self, c: char) {
        let needed = self.buf.len() + c.len_utf8();
        if needed > self.buf.capacity() {
            let next = next_capacity(self.buf.capacity()).max(needed);
            self.buf.reserve_exact(next - self.buf.len());
        }

        self.buf.push(c);
        self.scalars += 1;
    }

    /// Number of scalars held
    pub fn len(&self) -> usize {
        self.scalars
    }

    pub fn is_empty(&self) -> bool {
        self.scalars == 0
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// The held scalar, when there is exactly one
    pub fn single_scalar(&self) -> Option<char> {
        if self.scalars == 1 {
            self.buf.chars().next()
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.buf.clear();
        self.scalars = 0;
    }
}

fn next_capacity(old: usize) -> usize {
    match old {
        0 => INITIAL_CAPACITY,
        n if n >= LINEAR_GROWTH => n + LINEAR_GROWTH,
        n => n * 2,
    }
}

/// Monotonic counter starting at 1.
/// Values are never reset or reused for the lifetime of the generator.
#[derive(Debug)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn starting_from(start: u64) -> Self {
        Self { next: start }
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Number of ids handed out so far (for a generator started at 1).
    pub fn issued(&self) -> u64 {
        self.next - 1
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Derives turtle names as `prefix + counter`.
///
/// The counter advances on every request for a name, whether or not the
/// spawn that uses it later succeeds, so rejected spawns leave gaps.
#[derive(Debug)]
pub struct NameGenerator {
    prefix: String,
    counter: IdGenerator,
}

impl NameGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: IdGenerator::new(),
        }
    }

    pub fn next_name(&mut self) -> String {
        format!("{}{}", self.prefix, self.counter.next_id())
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// How many names have been derived so far.
    pub fn issued(&self) -> u64 {
        self.counter.issued()
    }
}

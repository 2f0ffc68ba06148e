use super::{constants::DEFAULT_MEMORY_LIMIT, types::Word};

/// The [`Memory`] struct represents the memory of an Intcode machine.
///
/// Memory is conceptually unbounded and zero-initialized: reading past the end yields zero
/// without allocating, and storing past the end grows the backing vector on demand. Growth is
/// bounded by a word limit so that a runaway address cannot exhaust the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    /// Vector storing memory words
    pub memory: Vec<Word>,

    /// The number of words the memory is allowed to grow to
    limit: usize,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// Creates a new, empty [`Memory`] with the default growth limit.
    ///
    /// ```
    /// use intcode_vm::core::memory::Memory;
    ///
    /// let memory = Memory::new();
    /// assert_eq!(memory.size(), 0);
    /// ```
    pub fn new() -> Memory {
        Memory::with_limit(DEFAULT_MEMORY_LIMIT)
    }

    /// Creates a new, empty [`Memory`] that may grow to at most `limit` words.
    pub fn with_limit(limit: usize) -> Memory {
        Memory { memory: Vec::new(), limit }
    }

    /// Creates a [`Memory`] holding a copy of `words` starting at address 0.
    ///
    /// The limit is raised to the program length if the program would not otherwise fit.
    ///
    /// ```
    /// use intcode_vm::core::{memory::Memory, types::words};
    ///
    /// let memory = Memory::from_words(&words(&[1, 0, 0, 0, 99]), 2);
    /// assert_eq!(memory.size(), 5);
    /// assert_eq!(memory.limit(), 5);
    /// ```
    pub fn from_words(words: &[Word], limit: usize) -> Memory {
        Memory { memory: words.to_vec(), limit: limit.max(words.len()) }
    }

    /// Gets the current size of the memory in words.
    pub fn size(&self) -> usize {
        self.memory.len()
    }

    /// Gets the number of words the memory may grow to.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Whether `address` can be written without exceeding the growth limit.
    ///
    /// ```
    /// use intcode_vm::core::memory::Memory;
    ///
    /// let memory = Memory::with_limit(16);
    /// assert!(memory.in_bounds(15));
    /// assert!(!memory.in_bounds(16));
    /// ```
    pub fn in_bounds(&self, address: usize) -> bool {
        address < self.limit
    }

    /// Extends the memory to `size` words, if necessary. New words are zero.
    ///
    /// ```
    /// use intcode_vm::core::memory::Memory;
    ///
    /// let mut memory = Memory::new();
    /// memory.extend(32);
    /// assert_eq!(memory.size(), 32);
    /// memory.extend(8);
    /// assert_eq!(memory.size(), 32);
    /// ```
    pub fn extend(&mut self, size: usize) {
        if size > self.size() {
            self.memory.resize(size, Word::ZERO);
        }
    }

    /// Read the word at `address`. Addresses past the end of memory read as zero.
    ///
    /// ```
    /// use intcode_vm::core::{memory::Memory, types::word};
    ///
    /// let memory = Memory::new();
    /// assert_eq!(memory.read(1_000_000), word(0));
    /// assert_eq!(memory.size(), 0);
    /// ```
    pub fn read(&self, address: usize) -> Word {
        self.memory.get(address).copied().unwrap_or(Word::ZERO)
    }

    /// Store `value` at `address`, growing the memory if necessary.
    ///
    /// The growth limit is not checked here; the machine validates every write target while
    /// resolving operands, before any state is touched.
    ///
    /// ```
    /// use intcode_vm::core::{memory::Memory, types::word};
    ///
    /// let mut memory = Memory::new();
    /// memory.store(4, word(99));
    /// assert_eq!(memory.size(), 5);
    /// assert_eq!(memory.read(4), word(99));
    /// assert_eq!(memory.read(3), word(0));
    /// ```
    pub fn store(&mut self, address: usize, value: Word) {
        self.extend(address.saturating_add(1));
        self.memory[address] = value;
    }
}

#[cfg(test)]
mod tests {
    use crate::core::types::{word, words};

    use super::*;

    #[test]
    fn test_store_simple() {
        let mut memory = Memory::from_words(&words(&[1, 2, 3]), 16);
        memory.store(1, word(42));
        assert_eq!(memory.memory, words(&[1, 42, 3]));
    }

    #[test]
    fn test_store_extend() {
        let mut memory = Memory::from_words(&words(&[1, 2, 3]), 16);
        memory.store(6, word(-1));
        assert_eq!(memory.memory, words(&[1, 2, 3, 0, 0, 0, -1]));
    }

    #[test]
    fn test_read_does_not_grow() {
        let memory = Memory::from_words(&words(&[7]), 16);
        assert_eq!(memory.read(12), word(0));
        assert_eq!(memory.size(), 1);
    }

    #[test]
    fn test_limit_never_below_program() {
        let memory = Memory::from_words(&words(&[0; 10]), 0);
        assert_eq!(memory.limit(), 10);
        assert!(memory.in_bounds(9));
        assert!(!memory.in_bounds(10));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut memory = Memory::from_words(&words(&[1, 2, 3]), 16);
        let snapshot = memory.clone();
        memory.store(0, word(100));
        assert_eq!(snapshot.read(0), word(1));
        assert_eq!(memory.read(0), word(100));
    }
}

use std::{
    collections::VecDeque,
    fmt::{self, Display},
};

use super::{
    constants::NEWLINE,
    types::{word, Word},
};

/// The [`InputQueue`] struct holds the values a driver has supplied but the machine has not yet
/// consumed. It is a FIFO: values are read by the `IN` instruction in the order they were pushed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct InputQueue {
    /// The pending values. The front of the deque is consumed first.
    pub queue: VecDeque<Word>,
}

impl InputQueue {
    /// Creates a new, empty [`InputQueue`].
    ///
    /// ```
    /// use intcode_vm::core::input::InputQueue;
    ///
    /// let input = InputQueue::new();
    /// assert!(input.is_empty());
    /// ```
    pub fn new() -> InputQueue {
        InputQueue { queue: VecDeque::new() }
    }

    /// Append a value to the back of the queue.
    pub fn push(&mut self, value: Word) {
        self.queue.push_back(value);
    }

    /// Append each character of `line` as its ASCII code, followed by a newline (10).
    ///
    /// ```
    /// use intcode_vm::core::{input::InputQueue, types::words};
    ///
    /// let mut input = InputQueue::new();
    /// input.push_ascii("go");
    /// assert_eq!(input.queue, words(&[103, 111, 10]));
    /// ```
    pub fn push_ascii(&mut self, line: &str) {
        self.queue.extend(line.chars().map(|c| word(c as i64)));
        self.queue.push_back(word(NEWLINE));
    }

    /// Remove and return the value at the front of the queue.
    ///
    /// ```
    /// use intcode_vm::core::{input::InputQueue, types::word};
    ///
    /// let mut input = InputQueue::new();
    /// input.push(word(1));
    /// input.push(word(2));
    /// assert_eq!(input.pop(), Some(word(1)));
    /// assert_eq!(input.pop(), Some(word(2)));
    /// assert_eq!(input.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<Word> {
        self.queue.pop_front()
    }

    /// The number of pending values.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether there are no pending values.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Extend<Word> for InputQueue {
    fn extend<T: IntoIterator<Item = Word>>(&mut self, iter: T) {
        self.queue.extend(iter);
    }
}

impl Display for InputQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self.queue.iter().map(|value| value.to_string()).collect::<Vec<String>>();
        write!(f, "[{}]", values.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::types::words;

    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut input = InputQueue::new();
        input.extend(words(&[3, 1, 4]));
        assert_eq!(input.pop(), Some(word(3)));
        input.push(word(5));
        assert_eq!(input.queue, words(&[1, 4, 5]));
    }

    #[test]
    fn test_push_ascii_empty_line() {
        let mut input = InputQueue::new();
        input.push_ascii("");
        assert_eq!(input.queue, words(&[10]));
    }

    #[test]
    fn test_display() {
        let mut input = InputQueue::new();
        input.extend(words(&[-1, 2]));
        assert_eq!(input.to_string(), "[-1, 2]");
    }
}

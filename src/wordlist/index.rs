/// A set of words that can be grown, queried and shrunk.
pub trait Index {
    /// Returns `true` if the word was newly added.
    fn add(&mut self, word: &str) -> bool;
    fn contains(&self, word: &str) -> bool;
    /// Returns `true` if the word was present.
    fn remove(&mut self, word: &str) -> bool;

    /// Adds every item, returning how many were new.
    fn add_all<'a, I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        items.into_iter().filter(|x| self.add(x)).count()
    }
}

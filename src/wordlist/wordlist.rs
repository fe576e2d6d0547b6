use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use tracing::{debug, info};
use typed_builder::TypedBuilder;

use crate::error::{Error, Result};
use crate::wordlist::index::Index;
use crate::wordlist::trie::Trie;

/// A [`Trie`] that knows how to load itself from, and save itself to, files.
#[derive(Default, Debug)]
pub struct Wordlist {
    trie: Trie,
}

/// Layout of a plain-text word file.
///
/// Without a delimiter each non-blank line is one word. With a delimiter the
/// word is taken from `word_column` (default 0).
#[derive(TypedBuilder, Debug, Clone)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self.delimiter {
            None => Some(line.trim()),
            Some(delimiter) => line
                .split(delimiter)
                .nth(self.word_column.unwrap_or(0))
                .map(str::trim),
        }
    }
}

impl Wordlist {
    pub fn new() -> Wordlist {
        Wordlist::default()
    }

    pub fn from_file<P: AsRef<Path>>(path: P, format: FileFormat) -> Result<Wordlist> {
        info!("Reading words from {:?}", path.as_ref());
        let file = File::open(path)?;
        Wordlist::from_reader(BufReader::new(file), format)
    }

    pub fn from_reader<R: BufRead>(reader: R, format: FileFormat) -> Result<Wordlist> {
        let start = Instant::now();
        let mut trie = Trie::new();
        let read = read_words(reader, &format, &mut trie)?;

        info!(
            "Read {} words ({} distinct) in {:.3}s",
            read,
            trie.count(),
            start.elapsed().as_secs_f64()
        );
        Ok(Wordlist { trie })
    }

    /// Writes the word list as a JSON array.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        Wordlist::save_trie_json(&self.trie, path)
    }

    /// Writes any trie's words as a JSON array without wrapping it first.
    pub fn save_trie_json<P: AsRef<Path>>(trie: &Trie, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        serde_json::to_writer(&mut writer, trie)?;
        writer.flush()?;
        debug!("Saved {} words to {:?}", trie.count(), path.as_ref());
        Ok(())
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Wordlist> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let trie: Trie = serde_json::from_reader(reader)?;
        debug!("Loaded {} words from {:?}", trie.count(), path.as_ref());
        Ok(Wordlist { trie })
    }

    delegate! {
        to self.trie {
            pub fn contains(&self, word: &str) -> bool;
            pub fn count(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn words(&self) -> Vec<String>;
            #[call(find_words_with_prefix)]
            pub fn with_prefix(&self, prefix: &str) -> Vec<String>;
        }
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn into_trie(self) -> Trie {
        self.trie
    }
}

/// Inserts every word of `reader` into `trie`, returning how many non-empty
/// words were read (duplicates included).
fn read_words<R: BufRead>(reader: R, format: &FileFormat, trie: &mut Trie) -> Result<usize> {
    let mut read = 0usize;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let word = format.parse_line(&line).ok_or_else(|| Error::MalformedLine {
            line: idx + 1,
            reason: format!("no column {}", format.word_column.unwrap_or(0)),
        })?;
        if word.is_empty() {
            continue;
        }
        trie.insert(word);
        read += 1;
    }
    Ok(read)
}

impl From<Trie> for Wordlist {
    fn from(trie: Trie) -> Self {
        Wordlist { trie }
    }
}

impl Index for Wordlist {
    delegate! {
        to self.trie {
            #[call(insert)]
            fn add(&mut self, word: &str) -> bool;
            fn contains(&self, word: &str) -> bool;
            fn remove(&mut self, word: &str) -> bool;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reads_one_word_per_line() {
        let input = "Hello\n\nhelp\n  good  \nHELLO\n";
        let wl = Wordlist::from_reader(Cursor::new(input), FileFormat::builder().build()).unwrap();
        assert_eq!(wl.count(), 3);
        assert!(wl.contains("hello"));
        assert!(wl.contains("GOOD"));
        assert_eq!(wl.with_prefix("hel"), vec!["hello", "help"]);
    }

    #[test]
    fn reads_word_column() {
        let input = "1\tcat\n2\tdog\n";
        let format = FileFormat::builder().delimiter('\t').word_column(1).build();
        let wl = Wordlist::from_reader(Cursor::new(input), format).unwrap();
        assert_eq!(wl.words(), vec!["cat", "dog"]);
    }

    #[test]
    fn empty_columns_are_not_counted() {
        let input = "cat,\ndog,x\n, \n";
        let format = FileFormat::builder().delimiter(',').word_column(1).build();
        let mut trie = Trie::new();
        let read = read_words(Cursor::new(input), &format, &mut trie).unwrap();
        assert_eq!(read, 1);
        assert_eq!(trie.words(), vec!["x"]);
    }

    #[test]
    fn duplicates_are_counted_as_read() {
        let mut trie = Trie::new();
        let read = read_words(Cursor::new("a\nA\nb\n"), &FileFormat::builder().build(), &mut trie).unwrap();
        assert_eq!(read, 3);
        assert_eq!(trie.count(), 2);
    }

    #[test]
    fn missing_column_is_malformed() {
        let input = "cat,1\ndog\n";
        let format = FileFormat::builder().delimiter(',').word_column(1).build();
        let err = Wordlist::from_reader(Cursor::new(input), format).unwrap_err();
        assert!(matches!(err, Error::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn index_methods_reach_trie() {
        let mut wl = Wordlist::new();
        assert_eq!(wl.add_all(vec!["a", "b", "a"]), 2);
        assert!(Index::remove(&mut wl, "a"));
        assert!(!wl.contains("a"));
        assert_eq!(wl.trie().count(), 1);
    }

    #[test]
    fn json_round_trip_through_file() {
        let path = std::env::temp_dir().join(format!("grid-words-{}.json", std::process::id()));
        let wl: Wordlist = vec!["cat", "car"].into_iter().collect::<Trie>().into();
        wl.save_json(&path).unwrap();

        let loaded = Wordlist::load_json(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded.words(), vec!["car", "cat"]);
    }

    #[test]
    fn save_trie_json_writes_borrowed_trie() {
        let path = std::env::temp_dir().join(format!("grid-words-trie-{}.json", std::process::id()));
        let trie: Trie = vec!["dog", "do"].into_iter().collect();
        Wordlist::save_trie_json(&trie, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(written, r#"["do","dog"]"#);
        assert_eq!(trie.count(), 2);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn save_json_reports_write_failure() {
        let wl: Wordlist = vec!["cat"].into_iter().collect::<Trie>().into();
        let err = wl.save_json("/dev/full").unwrap_err();
        assert!(matches!(err, Error::Io(_)), "{:?}", err);
    }
}

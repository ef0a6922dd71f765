/// Delimiter used by the command line runner when none is given.
pub const DEFAULT_DELIMITER: char = '\0';

/// Failure function of the sequence `at(0), .., at(len - 1)`.
///
/// `pi[i]` is the length of the longest proper prefix of the first `i + 1`
/// elements that is also their suffix. `pi[0] == 0`.
pub fn prefix_function<T, F>(len: usize, mut at: F) -> Vec<usize>
where
    T: PartialEq,
    F: FnMut(usize) -> T,
{
    let mut pi = vec![0; len];
    for i in 1..len {
        let c = at(i);
        let mut k = pi[i - 1];
        while k > 0 && at(k) != c {
            k = pi[k - 1];
        }
        if at(k) == c {
            k += 1;
        }
        pi[i] = k;
    }
    pi
}

/// Every offset of `pattern` in `text`, found through the failure function
/// of `pattern + [delimiter] + text`.
///
/// `delimiter` must occur in neither input; this is not checked. An empty
/// pattern reports offsets `1..=text.len()`.
pub fn all_indices_of<T: PartialEq>(text: &[T], pattern: &[T], delimiter: T) -> Vec<usize> {
    let m = pattern.len();
    let pi = prefix_function(m + 1 + text.len(), |i| {
        if i < m {
            &pattern[i]
        } else if i == m {
            &delimiter
        } else {
            &text[i - m - 1]
        }
    });
    (m + 1..pi.len())
        .filter(|&i| pi[i] == m)
        .map(|i| i - 2 * m)
        .collect()
}

/// Streaming matcher: yields the start offset of each occurrence of
/// `pattern` as `text` is consumed. Needs no delimiter. An empty pattern
/// never matches.
pub fn kmp_matches<'a, T: PartialEq + 'a>(
    text: impl IntoIterator<Item = T> + 'a,
    pattern: &'a [T],
) -> impl Iterator<Item = usize> + 'a {
    let jump_table = prefix_function(pattern.len(), |i| &pattern[i]);

    let mut j = 0;
    text.into_iter().enumerate().filter_map(move |(i, c)| {
        if pattern.is_empty() {
            return None;
        }
        while j == pattern.len() || j > 0 && pattern[j] != c {
            j = jump_table[j - 1];
        }
        if pattern[j] == c {
            j += 1;
        }
        (j == pattern.len()).then(|| i + 1 - pattern.len())
    })
}

pub trait PrefixFunction {
    type Item;

    fn prefix_function(&self) -> Vec<usize>;
    fn all_indices_of(&self, pattern: &Self, delimiter: Self::Item) -> Vec<usize>;
}

impl<T: PartialEq> PrefixFunction for [T] {
    type Item = T;

    fn prefix_function(&self) -> Vec<usize> {
        prefix_function(self.len(), |i| &self[i])
    }

    fn all_indices_of(&self, pattern: &Self, delimiter: T) -> Vec<usize> {
        all_indices_of(self, pattern, delimiter)
    }
}

// offsets are counted in chars, not bytes
impl PrefixFunction for str {
    type Item = char;

    fn prefix_function(&self) -> Vec<usize> {
        let chars: Vec<char> = self.chars().collect();
        chars.prefix_function()
    }

    fn all_indices_of(&self, pattern: &Self, delimiter: char) -> Vec<usize> {
        let text: Vec<char> = self.chars().collect();
        let pattern: Vec<char> = pattern.chars().collect();
        all_indices_of(&text, &pattern, delimiter)
    }
}

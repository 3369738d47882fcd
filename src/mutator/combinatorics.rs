//! Index-based enumeration over small ordered sequences.
//!
//! Everything here works on positions (`0..n`) rather than on the items
//! themselves, so callers can look up whatever per-token representation they
//! need (full name, initial, ...) without cloning strings while iterating.

/// Iterator over the `r`-element combinations of `0..n`, in lexicographic order.
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, r: usize) -> Self {
        Self {
            n,
            indices: (0..r).collect(),
            started: false,
            done: r > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        // Rightmost slot that can still move forward
        let r = self.indices.len();
        let mut i = r;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[i] < self.n - r + i {
                break;
            }
        }

        self.indices[i] += 1;
        for j in i + 1..r {
            self.indices[j] = self.indices[j - 1] + 1;
        }

        Some(self.indices.clone())
    }
}

/// Iterator over every ordering of `items`, in lexicographic order of
/// their original positions. Items are treated as distinct even if equal.
pub struct Permutations<T> {
    items: Vec<T>,
    order: Vec<usize>,
    started: bool,
    done: bool,
}

impl<T: Clone> Permutations<T> {
    pub fn new(items: Vec<T>) -> Self {
        let order = (0..items.len()).collect();
        Self {
            items,
            order,
            started: false,
            done: false,
        }
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if self.started {
            if !next_permutation(&mut self.order) {
                self.done = true;
                return None;
            }
        } else {
            self.started = true;
        }

        Some(self.order.iter().map(|&i| self.items[i].clone()).collect())
    }
}

/// Rearrange `order` into the next lexicographically greater permutation.
/// Returns false once the last permutation has been reached.
fn next_permutation(order: &mut [usize]) -> bool {
    if order.len() < 2 {
        return false;
    }

    let mut i = order.len() - 1;
    while i > 0 && order[i - 1] >= order[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }

    let mut j = order.len() - 1;
    while order[j] <= order[i - 1] {
        j -= 1;
    }

    order.swap(i - 1, j);
    order[i..].reverse();
    true
}

/// Odometer over `n` binary choices. Yields all `2^n` vectors, starting with
/// all `false`; the last position varies fastest.
pub struct BinaryChoices {
    choices: Vec<bool>,
    done: bool,
}

impl BinaryChoices {
    pub fn new(n: usize) -> Self {
        Self {
            choices: vec![false; n],
            done: false,
        }
    }
}

impl Iterator for BinaryChoices {
    type Item = Vec<bool>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let current = self.choices.clone();

        match self.choices.iter().rposition(|&c| !c) {
            Some(pos) => {
                self.choices[pos] = true;
                for c in &mut self.choices[pos + 1..] {
                    *c = false;
                }
            }
            None => self.done = true,
        }

        Some(current)
    }
}

/// Every non-empty ordered selection of positions from `0..n`: each
/// combination of each size, in each of its orderings.
pub fn ordered_selections(n: usize) -> impl Iterator<Item = Vec<usize>> {
    (1..=n)
        .flat_map(move |r| Combinations::new(n, r))
        .flat_map(Permutations::new)
}

/// Number of items [`ordered_selections`] yields for `n`: the sum of the
/// falling factorials `n!/(n-r)!` for `r` in `1..=n`. `None` on overflow.
pub fn ordered_selection_count(n: usize) -> Option<u128> {
    let mut total: u128 = 0;
    let mut falling: u128 = 1;
    for k in 0..n {
        falling = falling.checked_mul((n - k) as u128)?;
        total = total.checked_add(falling)?;
    }
    Some(total)
}

//! Breadth-first distance routines over an [`AdjacencyIndex`]

use crate::core::Word;
use crate::index::AdjacencyIndex;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Layer count from `from` to `to` by growing the reachable set
///
/// Each round replaces the reached set with itself plus every neighbor of
/// its members. The search stops when `to` is reached (returning the round
/// count) or when a round adds nothing (returning `None`). Because the
/// reached set only grows and is bounded by the index size, at most
/// `index.len()` rounds run.
///
/// Words outside the index are unreachable, except that any word is at
/// distance zero from itself.
#[must_use]
pub fn frontier_distance(index: &AdjacencyIndex, from: &Word, to: &Word) -> Option<usize> {
    if from == to {
        return Some(0);
    }
    let from = index.id_of(from)?;
    let to = index.id_of(to)?;

    // The frontier is cumulative, so it doubles as the visited set.
    let mut reached: FxHashSet<usize> = FxHashSet::default();
    reached.insert(from);
    let mut layers = 0;

    while !reached.contains(&to) {
        let mut next = reached.clone();
        for &id in &reached {
            next.extend(index.neighbor_ids(id).iter().copied());
        }
        if next.len() == reached.len() {
            return None;
        }
        reached = next;
        layers += 1;
    }

    Some(layers)
}

/// Shortest distance from every indexed word to `target`
///
/// Runs a single BFS outward from `target`; the result is indexed by word
/// id and holds `None` for words in other components. Edges are
/// undirected, so distance-to and distance-from coincide.
pub(crate) fn distances_to(index: &AdjacencyIndex, target: usize) -> Vec<Option<usize>> {
    let mut distances = vec![None; index.len()];
    distances[target] = Some(0);

    let mut queue = VecDeque::from([target]);
    while let Some(id) = queue.pop_front() {
        let next = distances[id].map_or(0, |d| d + 1);
        for &neighbor in index.neighbor_ids(id) {
            if distances[neighbor].is_none() {
                distances[neighbor] = Some(next);
                queue.push_back(neighbor);
            }
        }
    }

    distances
}

/// Walk from `start` towards the BFS target, one layer at a time
///
/// At each step the first neighbor (in word order) that is one layer closer
/// is taken. Returns `None` if `start` is not connected to the target.
pub(crate) fn walk_down(
    index: &AdjacencyIndex,
    distances: &[Option<usize>],
    start: usize,
) -> Option<Vec<Word>> {
    let mut current = start;
    let mut remaining = distances[current]?;
    let mut path = Vec::with_capacity(remaining + 1);
    path.push(index.word(current).clone());

    while remaining > 0 {
        remaining -= 1;
        current = *index
            .neighbor_ids(current)
            .iter()
            .find(|&&neighbor| distances[neighbor] == Some(remaining))?;
        path.push(index.word(current).clone());
    }

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(start: &str, end: &str, dictionary: &[&str]) -> AdjacencyIndex {
        let dictionary: Vec<Word> = dictionary.iter().map(|&t| Word::new(t)).collect();
        AdjacencyIndex::build(&Word::new(start), &Word::new(end), &dictionary).unwrap()
    }

    #[test]
    fn frontier_distance_simple_chain() {
        let index = build("cat", "dog", &["cat", "cot", "cog", "dog"]);
        let distance = frontier_distance(&index, &Word::new("cat"), &Word::new("dog"));
        assert_eq!(distance, Some(3));
    }

    #[test]
    fn frontier_distance_same_word() {
        let index = build("cat", "cat", &["cat"]);
        let cat = Word::new("cat");
        assert_eq!(frontier_distance(&index, &cat, &cat), Some(0));
    }

    #[test]
    fn frontier_distance_disconnected() {
        let index = build("cat", "dog", &["cat", "dog"]);
        let distance = frontier_distance(&index, &Word::new("cat"), &Word::new("dog"));
        assert_eq!(distance, None);
    }

    #[test]
    fn frontier_distance_unknown_word() {
        let index = build("cat", "dog", &["cat", "cot", "cog", "dog"]);
        let distance = frontier_distance(&index, &Word::new("cut"), &Word::new("dog"));
        assert_eq!(distance, None);
    }

    #[test]
    fn frontier_distance_takes_shortcut() {
        // cat-cot-cog-dog is 3, cat-hat-hot-hog-dog is 4
        let index = build(
            "cat",
            "dog",
            &["cat", "cot", "cog", "dog", "hat", "hot", "hog"],
        );
        let distance = frontier_distance(&index, &Word::new("cat"), &Word::new("dog"));
        assert_eq!(distance, Some(3));
    }

    #[test]
    fn distances_to_labels_every_reachable_word() {
        let index = build("cat", "dog", &["cat", "cot", "cog", "dog", "zzz"]);
        let dog = index.id_of(&Word::new("dog")).unwrap();
        let distances = distances_to(&index, dog);

        let lookup = |text: &str| distances[index.id_of(&Word::new(text)).unwrap()];
        assert_eq!(lookup("dog"), Some(0));
        assert_eq!(lookup("cog"), Some(1));
        assert_eq!(lookup("cot"), Some(2));
        assert_eq!(lookup("cat"), Some(3));
        assert_eq!(lookup("zzz"), None);
    }

    #[test]
    fn distances_to_matches_frontier_distance() {
        let index = build(
            "cold",
            "warm",
            &[
                "cold", "cord", "card", "ward", "warm", "word", "worm", "wore", "core", "bold",
                "bolt",
            ],
        );
        let warm = Word::new("warm");
        let distances = distances_to(&index, index.id_of(&warm).unwrap());

        for (id, word) in index.words().iter().enumerate() {
            assert_eq!(
                distances[id],
                frontier_distance(&index, word, &warm),
                "mismatch for {word}"
            );
        }
    }

    #[test]
    fn walk_down_takes_first_candidate() {
        // cat->bat->bag and cat->cag->bag tie; "bat" sorts before "cag"
        let index = build("cat", "bag", &["cat", "bat", "cag", "bag"]);
        let target = index.id_of(&Word::new("bag")).unwrap();
        let distances = distances_to(&index, target);
        let start = index.id_of(&Word::new("cat")).unwrap();

        let path = walk_down(&index, &distances, start).unwrap();
        let texts: Vec<&str> = path.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["cat", "bat", "bag"]);
    }

    #[test]
    fn walk_down_unreachable() {
        let index = build("cat", "dog", &["cat", "dog"]);
        let target = index.id_of(&Word::new("dog")).unwrap();
        let distances = distances_to(&index, target);
        let start = index.id_of(&Word::new("cat")).unwrap();

        assert!(walk_down(&index, &distances, start).is_none());
    }
}

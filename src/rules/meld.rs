//! Grouping and meld extraction.
//!
//! Pure functions over a hand and the table of completed sets. The turn
//! handlers call these and turn the returned report into events.

use rustc_hash::FxHashMap;

use crate::cards::{Card, Rank};
use crate::core::SetTable;

/// Smallest group of one rank that forms a set.
pub const MIN_SET_SIZE: usize = 3;

/// Cards of a hand grouped by rank.
pub type RankGroups = FxHashMap<Rank, Vec<Card>>;

/// Partition a hand by rank, keeping encounter order within each group.
///
/// ```
/// use go_fish::cards::{Card, Rank, Suit};
/// use go_fish::rules::group_by_rank;
///
/// let hand = [
///     Card::new(Rank::Three, Suit::Diamonds),
///     Card::new(Rank::Seven, Suit::Clubs),
///     Card::new(Rank::Three, Suit::Spades),
/// ];
/// let groups = group_by_rank(&hand);
/// assert_eq!(groups[&Rank::Three].len(), 2);
/// assert_eq!(groups[&Rank::Seven].len(), 1);
/// ```
#[must_use]
pub fn group_by_rank(hand: &[Card]) -> RankGroups {
    let mut groups = RankGroups::default();
    for &card in hand {
        groups.entry(card.rank).or_default().push(card);
    }
    groups
}

/// What a call to `extract_sets` moved onto the table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MeldReport {
    /// Groups of `MIN_SET_SIZE` or more laid down, in rank order.
    pub completed: Vec<(Rank, Vec<Card>)>,
    /// Leftover cards that joined an existing set.
    pub added: Vec<Card>,
}

impl MeldReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty() && self.added.is_empty()
    }
}

/// Move every meld out of `hand` and onto `sets`.
///
/// First pass: each rank with at least `MIN_SET_SIZE` cards leaves the hand
/// and starts or extends `sets[rank]`. Second pass: any remaining card whose
/// rank already has a set joins it.
pub fn extract_sets(hand: &mut Vec<Card>, sets: &mut SetTable) -> MeldReport {
    let mut groups = group_by_rank(hand);
    let mut report = MeldReport::default();

    for rank in Rank::ALL {
        let Some(group) = groups.remove(&rank) else {
            continue;
        };
        if group.len() < MIN_SET_SIZE {
            continue;
        }

        hand.retain(|c| c.rank != rank);
        sets.entry(rank).or_default().extend_from_slice(&group);
        report.completed.push((rank, group));
    }

    let (joining, kept): (Vec<Card>, Vec<Card>) = std::mem::take(hand)
        .into_iter()
        .partition(|c| sets.contains_key(&c.rank));
    *hand = kept;

    for &card in &joining {
        sets.entry(card.rank).or_default().push(card);
    }
    report.added = joining;

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn test_group_by_rank() {
        let hand = [
            card(Rank::Three, Suit::Diamonds),
            card(Rank::Three, Suit::Spades),
            card(Rank::Three, Suit::Hearts),
            card(Rank::Seven, Suit::Clubs),
        ];

        let groups = group_by_rank(&hand);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&Rank::Three], hand[..3].to_vec());
        assert_eq!(groups[&Rank::Seven], vec![card(Rank::Seven, Suit::Clubs)]);
    }

    #[test]
    fn test_group_preserves_encounter_order() {
        let hand = [
            card(Rank::King, Suit::Clubs),
            card(Rank::Two, Suit::Hearts),
            card(Rank::King, Suit::Diamonds),
        ];

        let groups = group_by_rank(&hand);
        assert_eq!(
            groups[&Rank::King],
            vec![card(Rank::King, Suit::Clubs), card(Rank::King, Suit::Diamonds)]
        );
    }

    #[test]
    fn test_group_empty_hand() {
        assert!(group_by_rank(&[]).is_empty());
    }

    #[test]
    fn test_four_of_a_kind_empties_hand() {
        let mut hand = vec![
            card(Rank::Three, Suit::Diamonds),
            card(Rank::Three, Suit::Spades),
            card(Rank::Three, Suit::Hearts),
            card(Rank::Three, Suit::Clubs),
        ];
        let expected = hand.clone();
        let mut sets = SetTable::default();

        let report = extract_sets(&mut hand, &mut sets);

        assert!(hand.is_empty());
        assert_eq!(sets[&Rank::Three], expected);
        assert_eq!(report.completed, vec![(Rank::Three, expected)]);
        assert!(report.added.is_empty());
    }

    #[test]
    fn test_pair_is_not_a_set() {
        let mut hand = vec![
            card(Rank::Nine, Suit::Diamonds),
            card(Rank::Nine, Suit::Spades),
            card(Rank::Ace, Suit::Hearts),
        ];
        let mut sets = SetTable::default();

        let report = extract_sets(&mut hand, &mut sets);

        assert!(report.is_empty());
        assert!(sets.is_empty());
        assert_eq!(hand.len(), 3);
    }

    #[test]
    fn test_stray_card_joins_existing_set() {
        let mut sets = SetTable::default();
        sets.insert(
            Rank::Three,
            vec![
                card(Rank::Three, Suit::Spades),
                card(Rank::Three, Suit::Hearts),
                card(Rank::Three, Suit::Clubs),
            ],
        );
        let mut hand = vec![card(Rank::Three, Suit::Diamonds), card(Rank::Seven, Suit::Clubs)];

        let report = extract_sets(&mut hand, &mut sets);

        assert_eq!(hand, vec![card(Rank::Seven, Suit::Clubs)]);
        assert_eq!(sets[&Rank::Three].len(), 4);
        assert_eq!(sets[&Rank::Three][3], card(Rank::Three, Suit::Diamonds));
        assert!(report.completed.is_empty());
        assert_eq!(report.added, vec![card(Rank::Three, Suit::Diamonds)]);
        assert!(!sets.contains_key(&Rank::Seven));
    }

    #[test]
    fn test_second_group_extends_existing_set() {
        // Two decks: a second triple of a rank already on the table.
        let mut sets = SetTable::default();
        sets.insert(
            Rank::Queen,
            vec![
                card(Rank::Queen, Suit::Spades),
                card(Rank::Queen, Suit::Hearts),
                card(Rank::Queen, Suit::Clubs),
            ],
        );
        let mut hand = vec![
            card(Rank::Queen, Suit::Spades),
            card(Rank::Queen, Suit::Hearts),
            card(Rank::Queen, Suit::Diamonds),
        ];

        let report = extract_sets(&mut hand, &mut sets);

        assert!(hand.is_empty());
        assert_eq!(sets[&Rank::Queen].len(), 6);
        assert_eq!(report.completed.len(), 1);
    }

    #[test]
    fn test_multiple_sets_in_one_pass() {
        let mut hand = vec![
            card(Rank::Five, Suit::Diamonds),
            card(Rank::Jack, Suit::Spades),
            card(Rank::Five, Suit::Spades),
            card(Rank::Jack, Suit::Hearts),
            card(Rank::Five, Suit::Hearts),
            card(Rank::Jack, Suit::Clubs),
            card(Rank::Two, Suit::Clubs),
        ];
        let mut sets = SetTable::default();

        let report = extract_sets(&mut hand, &mut sets);

        assert_eq!(hand, vec![card(Rank::Two, Suit::Clubs)]);
        let ranks: Vec<_> = report.completed.iter().map(|(r, _)| *r).collect();
        // Rank order, ace first.
        assert_eq!(ranks, vec![Rank::Jack, Rank::Five]);
    }
}

// src/domain/ranking.rs
//
// Summary ordering.
//
// Total score descending, then most recently started first. start_order is
// unique inside a registry, so the result is fully determined by its input set.

use std::cmp::Ordering;

use super::fixture::Fixture;

/// Comparator used by the summary view
pub fn summary_order(a: &Fixture, b: &Fixture) -> Ordering {
    b.total_score()
        .cmp(&a.total_score())
        .then_with(|| b.start_order().cmp(&a.start_order()))
}

/// Sort fixtures into summary order
pub fn rank_fixtures(mut fixtures: Vec<Fixture>) -> Vec<Fixture> {
    fixtures.sort_by(summary_order);
    fixtures
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CountryCatalog, Participant};

    fn fixture(home: &str, away: &str, order: u64, score: (u32, u32)) -> Fixture {
        let catalog = CountryCatalog::builtin();
        let mut fixture = Fixture::start(
            Participant::parse(home, &catalog).unwrap(),
            Participant::parse(away, &catalog).unwrap(),
            order,
        )
        .unwrap();
        fixture.set_score(score.0, score.1);
        fixture
    }

    fn labels(fixtures: &[Fixture]) -> Vec<String> {
        fixtures.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_fixtures(Vec::new()).is_empty());
    }

    #[test]
    fn test_higher_total_first_then_most_recent() {
        let a = fixture("Spain", "France", 1, (2, 1));
        let b = fixture("Mexico", "Canada", 2, (0, 5));
        let c = fixture("Germany", "Italy", 3, (3, 2));

        let ranked = rank_fixtures(vec![a, b, c]);
        assert_eq!(
            labels(&ranked),
            vec!["Germany 3 - 2 Italy", "Mexico 0 - 5 Canada", "Spain 2 - 1 France"]
        );
    }

    #[test]
    fn test_world_cup_example() {
        let fixtures = vec![
            fixture("Mexico", "Canada", 1, (0, 5)),
            fixture("Spain", "Brazil", 2, (10, 2)),
            fixture("Germany", "France", 3, (2, 2)),
            fixture("Uruguay", "Italy", 4, (6, 6)),
            fixture("Argentina", "Australia", 5, (3, 1)),
        ];

        assert_eq!(
            labels(&rank_fixtures(fixtures)),
            vec![
                "Uruguay 6 - 6 Italy",
                "Spain 10 - 2 Brazil",
                "Mexico 0 - 5 Canada",
                "Argentina 3 - 1 Australia",
                "Germany 2 - 2 France",
            ]
        );
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let a = fixture("Spain", "France", 1, (1, 1));
        let b = fixture("Mexico", "Canada", 2, (2, 0));
        let c = fixture("Germany", "Italy", 3, (0, 0));

        let forward = rank_fixtures(vec![a.clone(), b.clone(), c.clone()]);
        let backward = rank_fixtures(vec![c, b, a]);
        assert_eq!(forward, backward);
    }
}

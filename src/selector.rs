//! Random question draw for a lesson attempt.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::Question;

/// Draw `count` distinct questions from `bank` in a uniformly random order.
///
/// The whole pool is shuffled (Fisher-Yates) before truncation, so every
/// ordering of the bank is equally likely. A `count` larger than the bank is
/// clamped: the caller gets every question, reordered.
pub fn select_questions<R>(bank: &[Question], count: usize, rng: &mut R) -> Vec<Question>
where
    R: Rng + ?Sized,
{
    let mut pool = bank.to_vec();
    pool.shuffle(rng);
    pool.truncate(count.min(bank.len()));
    pool
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::models::AnswerValue;

    fn bank(size: usize) -> Vec<Question> {
        (0..size)
            .map(|i| Question {
                id: format!("q{}", i),
                question: format!("What is {} + 1?", i),
                answer: AnswerValue::from(i as i64 + 1),
                options: vec![AnswerValue::from(i as i64), AnswerValue::from(i as i64 + 1)],
                explanation: String::new(),
                concept: None,
            })
            .collect()
    }

    fn ids(questions: &[Question]) -> Vec<String> {
        questions.iter().map(|q| q.id.clone()).collect()
    }

    #[test]
    fn test_draws_distinct_questions_from_bank() {
        let bank = bank(8);
        let mut rng = StdRng::seed_from_u64(7);

        let selected = select_questions(&bank, 5, &mut rng);
        assert_eq!(selected.len(), 5);

        let unique: HashSet<_> = selected.iter().map(|q| &q.id).collect();
        assert_eq!(unique.len(), 5);
        assert!(selected.iter().all(|q| bank.contains(q)));
    }

    #[test]
    fn test_count_is_clamped_to_bank_size() {
        let bank = bank(5);
        let mut rng = StdRng::seed_from_u64(1);

        let selected = select_questions(&bank, 10, &mut rng);
        let mut got = ids(&selected);
        got.sort();
        assert_eq!(got, ids(&bank));
    }

    #[test]
    fn test_same_seed_same_draw() {
        let bank = bank(8);
        let a = select_questions(&bank, 5, &mut StdRng::seed_from_u64(42));
        let b = select_questions(&bank, 5, &mut StdRng::seed_from_u64(42));
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn test_draws_vary_between_calls() {
        let bank = bank(8);
        let mut rng = StdRng::seed_from_u64(3);
        let first = ids(&select_questions(&bank, 5, &mut rng));

        let differs = (0..20).any(|_| ids(&select_questions(&bank, 5, &mut rng)) != first);
        assert!(differs);
    }

    #[test]
    fn test_every_question_can_lead() {
        let bank = bank(4);
        let mut rng = StdRng::seed_from_u64(11);
        let mut leaders = HashSet::new();

        for _ in 0..200 {
            leaders.insert(select_questions(&bank, 1, &mut rng)[0].id.clone());
        }
        assert_eq!(leaders.len(), 4);
    }

    #[test]
    fn test_empty_bank() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(select_questions(&[], 5, &mut rng).is_empty());
    }
}

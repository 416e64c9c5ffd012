//! Генератор стартового набора категорий.
//!
//! Числовые поля случайны и независимы друг от друга. Источник случайности
//! передаётся снаружи, чтобы тесты могли использовать детерминированный `StdRng`.

use rand::Rng;

use super::aggregate::{Category, CategoryId};
use crate::enums::Company;

/// Количество категорий в стартовом наборе
pub const SEED_SIZE: usize = 11;

/// Сдвиг номера в подписи: позиция 0 получает "Category -3"
pub const LABEL_OFFSET: i64 = 3;

const THRESHOLD_MIN: i32 = 100;
const THRESHOLD_MAX: i32 = 1100;
const PORTION_SIZE_MAX: u8 = 6;
const PRICE_MIN: f64 = 10.0;
const PRICE_MAX: f64 = 110.0;

/// Стартовый набор из `SEED_SIZE` категорий с ID 0..SEED_SIZE
pub fn generate_seed<R: Rng>(rng: &mut R) -> Vec<Category> {
    generate_seed_sized(rng, SEED_SIZE)
}

/// Стартовый набор заданного размера
pub fn generate_seed_sized<R: Rng>(rng: &mut R, size: usize) -> Vec<Category> {
    (0..size)
        .map(|position| generate_category(rng, CategoryId::new(position as u32), position))
        .collect()
}

/// Одна случайная категория; подпись строится по позиции в списке
pub fn generate_category<R: Rng>(
    rng: &mut R,
    id: CategoryId,
    position: usize,
) -> Category {
    let companies = Company::all();

    Category {
        id,
        name: Category::label_for_position(position),
        bottom_threshold: rng.gen_range(THRESHOLD_MIN..THRESHOLD_MAX),
        top_threshold: rng.gen_range(THRESHOLD_MIN..THRESHOLD_MAX),
        portion_size: rng.gen_range(1..=PORTION_SIZE_MAX),
        company: companies[rng.gen_range(0..companies.len())],
        sales_price: round_to_cents(rng.gen_range(PRICE_MIN..PRICE_MAX)),
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_seed_has_eleven_sequential_ids() {
        let mut rng = StdRng::seed_from_u64(7);
        let seed = generate_seed(&mut rng);

        assert_eq!(seed.len(), 11);
        let ids: Vec<u32> = seed.iter().map(|c| c.id.value()).collect();
        assert_eq!(ids, (0..11).collect::<Vec<u32>>());
    }

    #[test]
    fn test_seed_labels() {
        let mut rng = StdRng::seed_from_u64(1);
        let seed = generate_seed(&mut rng);

        assert_eq!(seed[0].name, "Category -3");
        assert_eq!(seed[3].name, "Category 0");
        assert_eq!(seed[10].name, "Category 7");
    }

    #[test]
    fn test_generated_values_in_range() {
        for s in 0..50 {
            let mut rng = StdRng::seed_from_u64(s);
            for c in generate_seed(&mut rng) {
                assert!((1..=6).contains(&c.portion_size), "portion {}", c.portion_size);
                assert!((100..1100).contains(&c.bottom_threshold));
                assert!((100..1100).contains(&c.top_threshold));
                assert!(c.sales_price >= 10.0 && c.sales_price <= 110.0);
                assert!(Company::all().contains(&c.company));

                let cents = c.sales_price * 100.0;
                assert!((cents - cents.round()).abs() < 1e-6, "price {}", c.sales_price);
            }
        }
    }

    #[test]
    fn test_ids_are_pairwise_unique() {
        let mut rng = StdRng::seed_from_u64(99);
        let seed = generate_seed(&mut rng);
        let unique: HashSet<CategoryId> = seed.iter().map(|c| c.id).collect();
        assert_eq!(unique.len(), seed.len());
    }

    #[test]
    fn test_same_rng_seed_same_data() {
        let a = generate_seed(&mut StdRng::seed_from_u64(3));
        let b = generate_seed(&mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_sized_seed() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(generate_seed_sized(&mut rng, 0).is_empty());
        assert_eq!(generate_seed_sized(&mut rng, 4).len(), 4);
    }

    #[test]
    fn test_generate_category_uses_given_id_and_position() {
        let mut rng = StdRng::seed_from_u64(11);
        let c = generate_category(&mut rng, CategoryId::new(20), 12);
        assert_eq!(c.id, CategoryId::new(20));
        assert_eq!(c.name, "Category 9");
    }
}

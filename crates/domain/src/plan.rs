use derive_more::Deref;
use rand::Rng;
use serde::Serialize;
use uuid::Uuid;

use crate::{Category, ImageRef, Name};

/// A (name, image) pair selected for a generated plan. Unlike [`Move`],
/// it carries no category or description.
///
/// [`Move`]: crate::Move
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub image: ImageRef,
}

impl Exercise {
    #[must_use]
    pub fn new(name: Name, image: ImageRef) -> Self {
        Self {
            id: ExerciseID::from(Uuid::new_v4()),
            name,
            image,
        }
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

/// A non-empty pool of exercise names and images for one category.
///
/// Emptiness is rejected at construction, which makes selection itself
/// infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExercisePool {
    category: Category,
    names: Vec<Name>,
    images: Vec<ImageRef>,
}

impl ExercisePool {
    pub fn new(
        category: Category,
        names: Vec<Name>,
        images: Vec<ImageRef>,
    ) -> Result<Self, PoolError> {
        if names.is_empty() {
            return Err(PoolError::NoNames(category));
        }

        if images.is_empty() {
            return Err(PoolError::NoImages(category));
        }

        Ok(Self {
            category,
            names,
            images,
        })
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn names(&self) -> &[Name] {
        &self.names
    }

    #[must_use]
    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    /// Selects an exercise by drawing a uniformly random name and a
    /// uniformly random image. The two draws are independent, so a name
    /// may be paired with any image of the pool.
    pub fn select(&self, rng: &mut impl Rng) -> Exercise {
        let name = &self.names[rng.gen_range(0..self.names.len())];
        let image = &self.images[rng.gen_range(0..self.images.len())];
        Exercise::new(name.clone(), image.clone())
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PoolError {
    #[error("{0} pool must contain at least one exercise name")]
    NoNames(Category),
    #[error("{0} pool must contain at least one image")]
    NoImages(Category),
    #[error("Expected {expected} pool ({actual} given)")]
    WrongCategory { expected: Category, actual: Category },
}

/// The three category pools a plan is generated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanPools {
    legs: ExercisePool,
    arms: ExercisePool,
    core: ExercisePool,
}

impl PlanPools {
    pub fn new(
        legs: ExercisePool,
        arms: ExercisePool,
        core: ExercisePool,
    ) -> Result<Self, PoolError> {
        for (expected, pool) in [
            (Category::Legs, &legs),
            (Category::Arms, &arms),
            (Category::Core, &core),
        ] {
            if pool.category() != expected {
                return Err(PoolError::WrongCategory {
                    expected,
                    actual: pool.category(),
                });
            }
        }

        Ok(Self { legs, arms, core })
    }

    #[must_use]
    pub fn pool(&self, category: Category) -> &ExercisePool {
        match category {
            Category::Legs => &self.legs,
            Category::Arms => &self.arms,
            Category::Core => &self.core,
        }
    }

    /// Generates a fresh plan of one exercise per category, in the fixed
    /// order legs, arms, core. Previous plans are not taken into account.
    pub fn generate(&self, rng: &mut impl Rng) -> Plan {
        Plan {
            exercises: vec![
                self.legs.select(rng),
                self.arms.select(rng),
                self.core.select(rng),
            ],
        }
    }
}

/// One generated daily workout plan, always exactly three exercises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    exercises: Vec<Exercise>,
}

impl Plan {
    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;
    use rand::{SeedableRng, rngs::StdRng};
    use rstest::rstest;

    use super::*;

    fn pool(category: Category, names: &[&str], images: &[&str]) -> ExercisePool {
        ExercisePool::new(
            category,
            names.iter().map(|n| Name::new(n).unwrap()).collect(),
            images.iter().map(|i| ImageRef::parse(i)).collect(),
        )
        .unwrap()
    }

    fn pools() -> PlanPools {
        PlanPools::new(
            pool(Category::Legs, &["Hip Thrusts", "Dumbbells Squat"], &["squat", "thrust"]),
            pool(Category::Arms, &["Hammer Curl"], &["hammercurl"]),
            pool(Category::Core, &["(Hanging) Crunches"], &["crunches"]),
        )
        .unwrap()
    }

    #[test]
    fn test_exercise_new_unique_id() {
        let name = Name::new("Hammer Curl").unwrap();
        let image = ImageRef::parse("hammercurl");

        assert_ne!(
            Exercise::new(name.clone(), image.clone()).id,
            Exercise::new(name, image).id
        );
    }

    #[rstest]
    #[case(&[], &["squat"], Err(PoolError::NoNames(Category::Legs)))]
    #[case(&["Hip Thrusts"], &[], Err(PoolError::NoImages(Category::Legs)))]
    fn test_exercise_pool_new_empty(
        #[case] names: &[&str],
        #[case] images: &[&str],
        #[case] expected: Result<ExercisePool, PoolError>,
    ) {
        assert_eq!(
            ExercisePool::new(
                Category::Legs,
                names.iter().map(|n| Name::new(n).unwrap()).collect(),
                images.iter().map(|i| ImageRef::parse(i)).collect(),
            ),
            expected
        );
    }

    #[test]
    fn test_exercise_pool_select_stays_in_pool() {
        let pool = pool(
            Category::Legs,
            &["Hip Thrusts", "Dumbbells Squat", "Single-Legged Squat"],
            &["squat", "thrust"],
        );
        let mut rng = StdRng::seed_from_u64(0);

        for _ in 0..100 {
            let exercise = pool.select(&mut rng);

            assert!(pool.names().contains(&exercise.name));
            assert!(pool.images().contains(&exercise.image));
        }
    }

    #[test]
    fn test_exercise_pool_select_single_element() {
        let pool = pool(Category::Core, &["(Hanging) Crunches"], &["crunches"]);
        let exercise = pool.select(&mut StdRng::seed_from_u64(0));

        assert_eq!(exercise.name, Name::new("(Hanging) Crunches").unwrap());
        assert_eq!(exercise.image, ImageRef::parse("crunches"));
    }

    #[test]
    fn test_exercise_pool_select_uniform_frequency() {
        let pool = pool(
            Category::Legs,
            &["A", "B", "C", "D", "E"],
            &["a", "b", "c"],
        );
        let mut rng = StdRng::seed_from_u64(42);
        let mut name_counts: BTreeMap<Name, u32> = BTreeMap::new();
        let mut image_counts: BTreeMap<String, u32> = BTreeMap::new();

        for _ in 0..6000 {
            let exercise = pool.select(&mut rng);
            *name_counts.entry(exercise.name).or_default() += 1;
            *image_counts.entry(exercise.image.to_string()).or_default() += 1;
        }

        assert_eq!(name_counts.len(), pool.names().len());
        assert!(name_counts.values().all(|&n| (900..=1500).contains(&n)));

        assert_eq!(image_counts.len(), pool.images().len());
        assert!(image_counts.values().all(|&n| (1700..=2300).contains(&n)));
    }

    #[test]
    fn test_plan_pools_new_wrong_category() {
        let legs = pool(Category::Legs, &["Hip Thrusts"], &["thrust"]);
        let core = pool(Category::Core, &["(Hanging) Crunches"], &["crunches"]);

        assert_eq!(
            PlanPools::new(legs.clone(), core, legs),
            Err(PoolError::WrongCategory {
                expected: Category::Arms,
                actual: Category::Core,
            })
        );
    }

    #[test]
    fn test_plan_pools_pool() {
        let pools = pools();

        for category in Category::iter() {
            assert_eq!(pools.pool(*category).category(), *category);
        }
    }

    #[test]
    fn test_plan_pools_generate() {
        let pools = pools();
        let mut rng = StdRng::seed_from_u64(0);

        for _ in 0..100 {
            let plan = pools.generate(&mut rng);

            assert_eq!(plan.exercises().len(), 3);

            for (exercise, category) in plan.exercises().iter().zip(Category::iter()) {
                let pool = pools.pool(*category);

                assert!(pool.names().contains(&exercise.name));
                assert!(pool.images().contains(&exercise.image));
            }
        }
    }

    #[test]
    fn test_plan_pools_generate_no_memory() {
        let pools = PlanPools::new(
            pool(Category::Legs, &["Hip Thrusts"], &["thrust"]),
            pool(Category::Arms, &["Hammer Curl"], &["hammercurl"]),
            pool(Category::Core, &["(Hanging) Crunches"], &["crunches"]),
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        let first = pools.generate(&mut rng);
        let second = pools.generate(&mut rng);

        assert_eq!(
            first
                .exercises()
                .iter()
                .map(|e| (&e.name, &e.image))
                .collect::<Vec<_>>(),
            second
                .exercises()
                .iter()
                .map(|e| (&e.name, &e.image))
                .collect::<Vec<_>>(),
        );
    }
}

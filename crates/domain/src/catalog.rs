//! Built-in catalog and plan pools.
//!
//! Process-wide static configuration, materialized once at first use. The
//! service takes this data as explicit construction parameters, so tests
//! can substitute their own.

use std::sync::LazyLock;

use crate::{Category, ExercisePool, ImageRef, Move, MoveID, Name, PlanPools};

struct Record {
    name: &'static str,
    category: Category,
    image: &'static str,
    description: &'static str,
}

pub static MOVES: LazyLock<Vec<Move>> = LazyLock::new(|| {
    RECORDS
        .iter()
        .zip(1u128..)
        .map(|(record, id)| Move {
            id: MoveID::from(id),
            name: Name::new(record.name).expect("built-in move names are valid"),
            category: record.category,
            image: ImageRef::parse(record.image),
            description: record.description.to_string(),
            completed: false,
        })
        .collect()
});

#[must_use]
pub fn pools() -> PlanPools {
    PlanPools::new(
        pool(Category::Legs, &LEGS_NAMES, &LEGS_IMAGES),
        pool(Category::Arms, &ARMS_NAMES, &ARMS_IMAGES),
        pool(Category::Core, &CORE_NAMES, &CORE_IMAGES),
    )
    .expect("built-in pools match their categories")
}

fn pool(category: Category, names: &[&str], images: &[&str]) -> ExercisePool {
    ExercisePool::new(
        category,
        names
            .iter()
            .map(|name| Name::new(name).expect("built-in exercise names are valid"))
            .collect(),
        images.iter().map(|image| ImageRef::parse(image)).collect(),
    )
    .expect("built-in pools are non-empty")
}

const LEGS_NAMES: [&str; 5] = [
    "Smith Machine Back Squat",
    "Single-Legged Squat",
    "Hip Thrusts",
    "Dumbbells Squat",
    "Dumbbells Single Legged Squat",
];

const LEGS_IMAGES: [&str; 6] = [
    "smith-squat-glute",
    "smith-single-squat-glute",
    "smith-rdl-angle-copy",
    "smith-hipthrust-down",
    "squat-quad-copy",
    "single-sqaut-quad",
];

const ARMS_NAMES: [&str; 6] = [
    "Smith Machine Shoulder Raises",
    "Hammer Curl",
    "Bicep Curls",
    "Overhead Shoulder Press",
    "Lat Pull-Downs",
    "Chin-Ups",
];

const ARMS_IMAGES: [&str; 6] = [
    "shoudler-raises-pull-copy",
    "hammercurl",
    "bicepcurl-pull",
    "shoulderpress-push",
    "lat-pulldown",
    "https://hacksisombath.com/workouts/chinup-pull.jpg",
];

const CORE_NAMES: [&str; 3] = [
    "Weighted Standing Crunches",
    "(Hanging) Crunches",
    "Weight Incline Sit-Ups",
];

const CORE_IMAGES: [&str; 3] = ["weighted-marches", "hanging-core-crunches", "inverse-crunches"];

const RECORDS: [Record; 15] = [
    Record {
        name: "Smith Machine Back Squat",
        category: Category::Legs,
        image: "smith-squat-glute",
        description: "This glute focused workout using the smith machine done by placing the bar shoulder height above you. You will set your feet shoulder width apart as your feet are half a step in front of you. Let the bar rest on top of the shoulders as you squat down, engage your glutes as you push the weight up through your heels.",
    },
    Record {
        name: "Single-Legged Squat",
        category: Category::Legs,
        image: "smith-single-squat-glute",
        description: "This glute focused workout using the smith machine.",
    },
    Record {
        name: "Russian Dead Lift",
        category: Category::Legs,
        image: "smith-rdl-angle-copy",
        description: "This glute focused workout using the smith machine. Have your feet shoulder width apart, chin tucked, hinge your hips backwards while keeping your back straight and let the bar pass slightly below your knees. Engage your glues and core as you pull the bar up, using the glutes to come forward to starting position.",
    },
    Record {
        name: "Hip Thrusts",
        category: Category::Legs,
        image: "smith-hipthrust-down",
        description: "With your shoulders set against a bench, align the bar on your hips, feet turned down hip-width apart, tuck your chin in as you push the weight through the back of your heels. Arch your back as you are coming down, keeping the chin tucked.",
    },
    Record {
        name: "Dumbbells Squat",
        category: Category::Legs,
        image: "squat-quad-copy",
        description: "This quad focused workout using the smith machine.",
    },
    Record {
        name: "Dumbbells Single Legged Squat",
        category: Category::Legs,
        image: "single-sqaut-quad",
        description: "This quad focused workout using the smith machine.",
    },
    Record {
        name: "Smith Machine Shoulder Raises",
        category: Category::Arms,
        image: "shoudler-raises-pull-copy",
        description: "Hold the bar with your knuckles facing each other, keeping your elbows boxed out vertically above the bar. Set the bar at waist height and engage your shoulders to pull slightly below your chest, creating a 90-degree angle with your elbows.",
    },
    Record {
        name: "Hammer Curl",
        category: Category::Arms,
        image: "hammercurl",
        description: "Box out both arms. Using a dumbbell, hold it to where your thumbs are facing toward you. Motion the dumbbell only moving through past your bicep. As if you are scrubbing your torso, keep your elbow aligned with the side of your body.",
    },
    Record {
        name: "Bicep Curls",
        category: Category::Arms,
        image: "bicepcurl-pull",
        description: "Hold the dumbbell horizontally, keep elbow still as you pull the bar towards your bicep and leverage down to a 90 degree.",
    },
    Record {
        name: "Overhead Shoulder Press",
        category: Category::Arms,
        image: "shoulderpress-push",
        description: "Straighten your back against the seat and have your arms parallel to each other. Engage your core and shoulder muscles, as you push up and slowly come down.",
    },
    Record {
        name: "Lat Pull-Downs",
        category: Category::Arms,
        image: "lat-pulldown",
        description: "Pull your shoulders back to engage your back, arms, and core to pull down while keeping arms boxed out. Keep your back from arching by tucking your tailbone in while tucking your chin down to avoid strain.",
    },
    Record {
        name: "Chin-Ups",
        category: Category::Arms,
        image: "chinup-pull",
        description: "Pull your shoulders back to engage your back, arms, and core to pull yourself up without jumping or pushing off from the stand.",
    },
    Record {
        name: "Weighted Standing Crunches",
        category: Category::Core,
        image: "weighted-marches",
        description: "Grab a chosen weight, holding it close to your chest, pull one knee at 90 degrees and alternate at a slow pace.",
    },
    Record {
        name: "(Hanging) Crunches",
        category: Category::Core,
        image: "hanging-core-crunches",
        description: "Keep tailbone tucked and back against the padding as your bring up either one or both legs.",
    },
    Record {
        name: "Weight Incline Sit-Ups",
        category: Category::Core,
        image: "inverse-crunches",
        description: "Keep tailbone and chin tucked as you engage your core to do this weighted sit-up. Choose a weight of your choice, either a dumbbell or plate, and engage your core to pull yourself up the incline.",
    },
];

//! Fixed per-grade question banks for the non-arithmetic subjects.
//!
//! Each bank is indexed by grade number (K = 0). Entries are
//! `(prompt, answer)`; answers are matched case-insensitively after trimming.

use super::types::{GradeLevel, Subject};

type Bank = [&'static [(&'static str, &'static str)]; 6];

static READING: Bank = [
    &[
        ("The cat sat on the mat. Where did the cat sit?", "mat"),
        ("Sam has a red ball. What color is the ball?", "red"),
        ("The dog ran to the park. Where did the dog run?", "park"),
    ],
    &[
        ("Mia ate an apple at lunch. What did Mia eat?", "apple"),
        ("The frog jumped into the pond. Where did the frog jump?", "pond"),
        ("Ben's kite is blue and flies high. What color is the kite?", "blue"),
    ],
    &[
        ("Lena watered her garden every morning, so the roses grew tall. What grew tall?", "roses"),
        ("The owl sleeps all day and hunts at night. When does the owl hunt?", "night"),
        ("Tom lost his hat at the beach, then found it under a towel. Where was the hat?", "towel"),
    ],
    &[
        ("Ravi saved coins for months to buy a telescope. What did Ravi buy?", "telescope"),
        ("When the storm knocked out the lights, Grandma lit a candle. What did Grandma light?", "candle"),
        ("The squirrel buried acorns in autumn so it could eat in winter. In which season did it bury them?", "autumn"),
    ],
    &[
        ("Despite the rain, the team finished the race by crossing the bridge. What did the team cross?", "bridge"),
        ("The explorer's compass pointed north, guiding her out of the canyon. Which direction did it point?", "north"),
        ("Maya practiced violin daily until the recital arrived. Which instrument did Maya play?", "violin"),
    ],
    &[
        ("The ancient map, hidden inside a hollow oak, revealed an island shaped like a crescent. What shape was the island?", "crescent"),
        ("After weeks of drought, the farmers celebrated when thunder finally rolled over the valley. What did the farmers hear?", "thunder"),
        ("The inventor's first machine failed, but her second design, a windmill, powered the village. What powered the village?", "windmill"),
    ],
];

static SCIENCE: Bank = [
    &[
        ("What do plants need from the sky to grow: sun or moon?", "sun"),
        ("What animal says moo?", "cow"),
        ("Is ice hot or cold?", "cold"),
    ],
    &[
        ("What do we call frozen water?", "ice"),
        ("Which body part do you use to smell?", "nose"),
        ("What baby animal grows into a frog?", "tadpole"),
    ],
    &[
        ("What gas do we breathe in to live?", "oxygen"),
        ("What is the closest star to Earth?", "sun"),
        ("What do caterpillars turn into?", "butterfly"),
    ],
    &[
        ("What force pulls objects toward the Earth?", "gravity"),
        ("What is the hardest natural substance?", "diamond"),
        ("Which planet is known as the red planet?", "mars"),
    ],
    &[
        ("What process do plants use to make food from sunlight?", "photosynthesis"),
        ("What is the largest organ of the human body?", "skin"),
        ("What state of matter is steam?", "gas"),
    ],
    &[
        ("What is the center of an atom called?", "nucleus"),
        ("Which organ pumps blood through the body?", "heart"),
        ("What is the largest planet in our solar system?", "jupiter"),
    ],
];

static VOCABULARY: Bank = [
    &[
        ("Which word means the opposite of up?", "down"),
        ("Which word means a baby cat?", "kitten"),
        ("Which word means the opposite of big?", "small"),
    ],
    &[
        ("Which word means very happy: glad or sad?", "glad"),
        ("Which word means the opposite of fast?", "slow"),
        ("Which word names the home of a bird?", "nest"),
    ],
    &[
        ("Which word means to look at something closely: examine or ignore?", "examine"),
        ("Which word means very large: huge or tiny?", "huge"),
        ("Which word means the opposite of brave?", "scared"),
    ],
    &[
        ("Which word means to guess what will happen: predict or recall?", "predict"),
        ("Which word means a person who writes books?", "author"),
        ("Which word means extremely tired: exhausted or eager?", "exhausted"),
    ],
    &[
        ("Which word means lasting a very short time: brief or endless?", "brief"),
        ("Which word means to make something less severe: mitigate or magnify?", "mitigate"),
        ("Which word means full of curiosity: inquisitive or indifferent?", "inquisitive"),
    ],
    &[
        ("Which word means happening by chance in a lucky way: serendipity or adversity?", "serendipity"),
        ("Which word means to make something seem bigger than it is: exaggerate or minimize?", "exaggerate"),
        ("Which word means unable to be seen: invisible or obvious?", "invisible"),
    ],
];

static MUSIC: Bank = [
    &[
        ("Is a drum hit or blown to make sound?", "hit"),
        ("Do you clap with your hands or feet?", "hands"),
        ("Is a whisper loud or soft?", "soft"),
    ],
    &[
        ("How many strings does a standard violin have? (answer in words)", "four"),
        ("What do we call a group of people singing together?", "choir"),
        ("Which instrument has black and white keys?", "piano"),
    ],
    &[
        ("What musical note comes after C?", "d"),
        ("What is the speed of music called: tempo or pitch?", "tempo"),
        ("How many lines are on a music staff? (answer in words)", "five"),
    ],
    &[
        ("How many beats does a whole note get in 4/4 time? (answer in words)", "four"),
        ("What Italian word means play loudly?", "forte"),
        ("What Italian word means play softly?", "piano"),
    ],
    &[
        ("What symbol raises a note by a half step?", "sharp"),
        ("What symbol lowers a note by a half step?", "flat"),
        ("What clef is used for high notes: treble or bass?", "treble"),
    ],
    &[
        ("How many notes are in a major scale, not counting the top octave? (answer in words)", "seven"),
        ("What is a set of three notes played together called?", "chord"),
        ("What Italian term means gradually getting louder?", "crescendo"),
    ],
];

/// The bank for a non-arithmetic subject at a grade, or `None` for math.
pub fn bank_for(subject: Subject, grade: GradeLevel) -> Option<&'static [(&'static str, &'static str)]> {
    let table = match subject {
        Subject::Reading => &READING,
        Subject::Science => &SCIENCE,
        Subject::Vocabulary => &VOCABULARY,
        Subject::Music => &MUSIC,
        _ => return None,
    };
    Some(table[grade.number() as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_text_subject_has_every_grade() {
        for subject in Subject::ALL.iter().filter(|s| !s.is_arithmetic()) {
            for grade in GradeLevel::ALL {
                let bank = bank_for(*subject, grade).expect("text subject has a bank");
                assert!(!bank.is_empty(), "{:?} grade {} is empty", subject, grade.label());
            }
        }
    }

    #[test]
    fn test_math_subjects_have_no_bank() {
        assert!(bank_for(Subject::Addition, GradeLevel::First).is_none());
        assert!(bank_for(Subject::MathMixed, GradeLevel::Fifth).is_none());
    }

    #[test]
    fn test_answers_are_normalized() {
        for subject in [Subject::Reading, Subject::Science, Subject::Vocabulary, Subject::Music] {
            for grade in GradeLevel::ALL {
                for (_, answer) in bank_for(subject, grade).unwrap() {
                    assert_eq!(*answer, answer.trim().to_lowercase());
                }
            }
        }
    }
}

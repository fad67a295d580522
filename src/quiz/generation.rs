//! Question generation by subject, grade and difficulty.

use rand::seq::SliceRandom;
use rand::Rng;

use super::banks::bank_for;
use super::types::{
    Answer, Arithmetic, Difficulty, GradeLevel, Operation, Question, Subject,
};

/// Operations a grade unlocks for mixed math.
pub fn unlocked_operations(grade: GradeLevel) -> Vec<Operation> {
    let mut ops = vec![Operation::Add, Operation::Subtract];
    if grade.number() >= 2 {
        ops.push(Operation::Multiply);
    }
    if grade.number() >= 3 {
        ops.push(Operation::Divide);
    }
    ops
}

/// Scale a grade cap by difficulty, never below 3.
fn scaled_cap(base: i64, difficulty: Difficulty) -> i64 {
    ((base as f64 * difficulty.magnitude_scale()).round() as i64).max(3)
}

/// Build an arithmetic question for one operation.
pub fn arithmetic_question<R: Rng>(
    op: Operation,
    difficulty: Difficulty,
    grade: GradeLevel,
    subject: Subject,
    rng: &mut R,
) -> Question {
    let operand_max = scaled_cap(grade.operand_cap(), difficulty);
    let factor_max = scaled_cap(grade.factor_cap(), difficulty);

    let (left, right, answer) = match op {
        Operation::Add => {
            let a = rng.gen_range(1..=operand_max);
            let b = rng.gen_range(1..=operand_max);
            (a, b, a + b)
        }
        Operation::Subtract => {
            let a = rng.gen_range(2..=operand_max);
            let b = rng.gen_range(1..=a);
            (a, b, a - b)
        }
        Operation::Multiply => {
            let a = rng.gen_range(1..=factor_max);
            let b = rng.gen_range(1..=factor_max);
            (a, b, a * b)
        }
        Operation::Divide => {
            // Quotient and divisor first so the dividend divides exactly.
            let quotient = rng.gen_range(1..=factor_max);
            let divisor = rng.gen_range(1..=factor_max);
            (quotient * divisor, divisor, quotient)
        }
    };

    Question {
        prompt: format!("{} {} {} = ?", left, op.symbol(), right),
        answer: Answer::Numeric(answer),
        difficulty,
        subject,
        arithmetic: Some(Arithmetic { op, left, right }),
    }
}

/// Draw a question from a text bank. Easy reads the grade below, hard the grade above.
fn bank_question<R: Rng>(
    subject: Subject,
    difficulty: Difficulty,
    grade: GradeLevel,
    rng: &mut R,
) -> Option<Question> {
    let effective_grade = match difficulty {
        Difficulty::Easy => grade.lower(),
        Difficulty::Medium => grade,
        Difficulty::Hard => grade.higher(),
    };
    let &(prompt, answer) = bank_for(subject, effective_grade)?.choose(rng)?;
    Some(Question {
        prompt: prompt.to_string(),
        answer: Answer::Text(answer.to_string()),
        difficulty,
        subject,
        arithmetic: None,
    })
}

/// Generate a question for the given configuration.
pub fn generate<R: Rng>(
    difficulty: Difficulty,
    subject: Subject,
    grade: GradeLevel,
    rng: &mut R,
) -> Question {
    let op = match subject {
        Subject::Addition => Operation::Add,
        Subject::Subtraction => Operation::Subtract,
        Subject::Multiplication => Operation::Multiply,
        Subject::Division => Operation::Divide,
        Subject::MathMixed => *unlocked_operations(grade)
            .choose(rng)
            .unwrap_or(&Operation::Add),
        Subject::Reading | Subject::Science | Subject::Vocabulary | Subject::Music => {
            if let Some(question) = bank_question(subject, difficulty, grade, rng) {
                return question;
            }
            // Every text subject has a bank for every grade.
            Operation::Add
        }
    };
    arithmetic_question(op, difficulty, grade, subject, rng)
}

/// Check a raw answer. Numeric questions parse an integer after trimming;
/// text questions compare case-insensitively after trimming.
pub fn evaluate(question: &Question, raw_input: &str) -> bool {
    let input = raw_input.trim();
    match &question.answer {
        Answer::Numeric(expected) => input.parse::<i64>().map_or(false, |n| n == *expected),
        Answer::Text(expected) => input.to_lowercase() == expected.trim().to_lowercase(),
    }
}

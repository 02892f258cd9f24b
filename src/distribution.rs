use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Result, SplitError};
use crate::models::{Assignment, AssignmentEntry};

fn check_inputs(questions: &[String], participants: &[String]) -> Result<()> {
    if questions.is_empty() {
        return Err(SplitError::NoQuestions);
    }
    if participants.is_empty() {
        return Err(SplitError::NoParticipants);
    }
    Ok(())
}

/// Splits the questions into contiguous blocks of equal size, one block per
/// participant in list order. Leftover questions are dealt round-robin
/// starting from the first participant, so counts never differ by more
/// than one.
pub fn distribute_even(questions: &[String], participants: &[String]) -> Result<Assignment> {
    check_inputs(questions, participants)?;

    let num_participants = participants.len();
    let per_participant = questions.len() / num_participants;

    let mut entries: Vec<AssignmentEntry> = participants
        .iter()
        .enumerate()
        .map(|(i, participant)| AssignmentEntry {
            participant: participant.clone(),
            questions: questions[per_participant * i..per_participant * (i + 1)].to_vec(),
        })
        .collect();

    // Leftover questions go around the table once, first participant first
    let remainder_start = per_participant * num_participants;
    for (i, question) in questions[remainder_start..].iter().enumerate() {
        entries[i % num_participants].questions.push(question.clone());
    }

    Ok(Assignment::from_entries(entries))
}

/// Shuffles the questions uniformly, then deals each one to the participant
/// currently holding the fewest. Ties go to the earliest participant in
/// list order, so for a fixed shuffle the placement is deterministic.
pub fn distribute_random<R: Rng>(
    questions: &[String],
    participants: &[String],
    rng: &mut R,
) -> Result<Assignment> {
    check_inputs(questions, participants)?;

    let mut shuffled = questions.to_vec();
    shuffled.shuffle(rng);

    let mut entries: Vec<AssignmentEntry> = participants
        .iter()
        .map(|participant| AssignmentEntry {
            participant: participant.clone(),
            questions: Vec::new(),
        })
        .collect();

    for question in shuffled {
        let mut target = 0;
        for i in 1..entries.len() {
            if entries[i].questions.len() < entries[target].questions.len() {
                target = i;
            }
        }
        entries[target].questions.push(question);
    }

    Ok(Assignment::from_entries(entries))
}

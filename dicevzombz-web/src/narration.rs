//! Turns the engine's structured round events into the message lines the
//! player reads. All narration text lives here; the engine never formats
//! prose.

use dicevzombz_game::constants::{MAX_ROUNDS, OVERWHELMED_BONUS_DAMAGE};
use dicevzombz_game::{DieFace, LossReason, Outcome, RoundEvent, RoundReport, WinReason};

pub const OPENING: &str = "The night begins... Roll the dice to survive!";
pub const REROLL_PROMPT: &str =
    "Initial roll complete. Select dice to re-roll, then click 'Re-roll Selected'.";

#[must_use]
pub const fn face_icon(face: DieFace) -> &'static str {
    match face {
        DieFace::ZombieAdd => "\u{1F9DF}",
        DieFace::BarricadeBoost => "\u{1F6E0}\u{FE0F}",
        DieFace::Attack => "\u{1F3AF}",
        DieFace::SuperAttack => "\u{1F4A5}",
        DieFace::Defend => "\u{1F6E1}\u{FE0F}",
    }
}

#[must_use]
pub const fn face_caption(face: DieFace) -> &'static str {
    match face {
        DieFace::ZombieAdd => "New Zombie!",
        DieFace::BarricadeBoost => "Barricade Boost!",
        DieFace::Attack => "Attack!",
        DieFace::SuperAttack => "Super Attack!",
        DieFace::Defend => "Defend!",
    }
}

#[must_use]
pub fn describe_event(event: &RoundEvent) -> String {
    match event {
        RoundEvent::Rolled { face } => {
            format!("Rolled: {} ({})", face_icon(*face), face_caption(*face))
        }
        RoundEvent::RerollSkipped => {
            "No dice selected for re-roll. Proceeding with current results.".to_string()
        }
        RoundEvent::ZombiesAttracted { count } => {
            format!("{count} new zombie(s) attracted by the noise! \u{1F9DF}")
        }
        RoundEvent::ZombiesDefeated { count } => {
            format!("You fought back, defeating {count} zombie(s)! \u{1F3AF}")
        }
        RoundEvent::BarricadeRepaired { repaired, boosted } => {
            let detail = match (*repaired, *boosted) {
                (0, boosted) => format!("significantly boosted by {boosted}"),
                (repaired, 0) => format!("reinforced by {repaired}"),
                (repaired, boosted) => format!("repaired by {repaired} and boosted by {boosted}"),
            };
            format!("Barricade {detail}! Total +{}.", repaired + boosted)
        }
        RoundEvent::HordeAttacked { damage, overwhelmed } => {
            if *overwhelmed {
                format!(
                    "The horde attacks! Barricade takes {damage} damage. The horde is \
                     OVERWHELMING! (+{OVERWHELMED_BONUS_DAMAGE} bonus damage) \u{1F494}"
                )
            } else {
                format!("The horde attacks! Barricade takes {damage} damage. \u{1F494}")
            }
        }
        RoundEvent::QuietRound => {
            "No zombies left to attack this round. A moment of peace!".to_string()
        }
    }
}

/// Narration for one resolved round, with a closing line when the game
/// ended on it.
#[must_use]
pub fn describe_report(report: &RoundReport) -> Vec<String> {
    let mut lines: Vec<String> = report.events.iter().map(describe_event).collect();
    match report.outcome {
        Outcome::Lost(LossReason::BarricadeBreached) => {
            lines.push("STAGE FAILED! The horde broke through!".to_string());
        }
        Outcome::Won(WinReason::HordeEliminated) => {
            lines.push("VICTORY! All zombies eliminated!".to_string());
        }
        Outcome::Won(WinReason::SurvivedAllRounds) => {
            lines.push(format!("SURVIVED! You lasted {MAX_ROUNDS} rounds!"));
        }
        Outcome::InProgress => {}
    }
    lines
}

#[must_use]
pub const fn outcome_title(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Lost(LossReason::BarricadeBreached) => "Stage Failed",
        Outcome::Won(WinReason::HordeEliminated) => "Stage Cleared",
        Outcome::Won(WinReason::SurvivedAllRounds) => "Stage Survived",
        Outcome::InProgress => "",
    }
}

#[must_use]
pub fn outcome_message(outcome: Outcome, stage: u32) -> String {
    match outcome {
        Outcome::Lost(LossReason::BarricadeBreached) => {
            "The zombies breached your barricade! Try again.".to_string()
        }
        Outcome::Won(WinReason::HordeEliminated) => {
            format!("Stage {stage} cleared! All zombies defeated! \u{1F389}")
        }
        Outcome::Won(WinReason::SurvivedAllRounds) => {
            format!("Stage {stage} complete! You lasted {MAX_ROUNDS} rounds! \u{1F305}")
        }
        Outcome::InProgress => String::new(),
    }
}

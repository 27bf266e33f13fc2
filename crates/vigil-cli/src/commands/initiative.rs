use std::fs;
use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;
use vigil_dice::{DicePool, Die};
use vigil_encounter::{
    Disposition, Encounter, EncounterSettings, GridDistance, MemorySink, OrderingMode,
    Participant, StandardStrategy,
};

pub fn run(
    file: Option<&Path>,
    team: bool,
    mode: Option<&str>,
    manual_threshold: u32,
    seed: u64,
    verbose: bool,
) -> Result<(), String> {
    let mut encounter = match file {
        Some(path) => {
            let json = fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            serde_json::from_str::<Encounter>(&json)
                .map_err(|e| format!("invalid encounter file: {e}"))?
        }
        None => demo_encounter(),
    };

    if team {
        encounter.settings.team_based = true;
    }
    if let Some(mode) = mode {
        encounter.settings.ordering_mode = parse_mode(mode)?;
    }
    if manual_threshold > 0 {
        encounter.settings.manual_threshold = manual_threshold;
    }

    let ids = encounter.participant_ids();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut sink = MemorySink::default();
    let summary = encounter.roll_initiative(
        &ids,
        &StandardStrategy,
        &GridDistance,
        &mut rng,
        Some(&mut sink),
    );

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Name", "Initiative", "Result", "Side"]);
    for (i, p) in encounter.participants().iter().enumerate() {
        let initiative = p
            .initiative
            .map(|v| format!("{v:.2}"))
            .unwrap_or_else(|| "—".to_string());
        let result = p.initiative_label.clone().unwrap_or_else(|| "—".to_string());
        let side = if p.player_controlled {
            "pc".to_string()
        } else {
            match p.disposition {
                Some(Disposition::Friendly) => "ally".to_string(),
                Some(Disposition::Neutral) => "neutral".to_string(),
                Some(Disposition::Hostile) => "enemy".to_string(),
                None => "?".to_string(),
            }
        };
        table.add_row(vec![
            (i + 1).to_string(),
            p.name.clone(),
            initiative,
            result,
            side,
        ]);
    }
    println!("{table}");

    if verbose {
        println!();
        for report in &sink.reports {
            println!("  {report}");
        }
    }
    if !summary.skipped.is_empty() {
        println!();
        println!("  {} participant(s) skipped", summary.skipped.len());
    }
    Ok(())
}

fn parse_mode(s: &str) -> Result<OrderingMode, String> {
    match s.trim().to_lowercase().as_str() {
        "pc_vs_npc" => Ok(OrderingMode::PcVsNpc),
        "npc_vs_pc" => Ok(OrderingMode::NpcVsPc),
        "allies_vs_enemies" => Ok(OrderingMode::AlliesVsEnemies),
        "enemies_vs_allies" => Ok(OrderingMode::EnemiesVsAllies),
        "pcs_allies_enemies" => Ok(OrderingMode::PcsAlliesEnemies),
        "enemies_pcs_allies" => Ok(OrderingMode::EnemiesPcsAllies),
        other => Err(format!("unknown ordering mode: {other}")),
    }
}

/// The built-in demo encounter: two players, an allied scout, two enemies.
fn demo_encounter() -> Encounter {
    let mut enc = Encounter::new(EncounterSettings::default());
    enc.add_participant(
        Participant::new("Mara")
            .player()
            .with_pool(DicePool::new().add(Die::D8, 2).add(Die::D6, 1))
            .at(0.0, 0.0),
    );
    enc.add_participant(
        Participant::new("Edrin")
            .player()
            .with_pool(DicePool::new().add(Die::D10, 1).add(Die::D6, 2))
            .at(2.0, 1.0),
    );
    enc.add_participant(
        Participant::new("Scout")
            .with_disposition(Disposition::Friendly)
            .with_pool(DicePool::new().add(Die::D6, 2))
            .at(1.0, 3.0),
    );
    enc.add_participant(
        Participant::new("Grask")
            .with_disposition(Disposition::Hostile)
            .with_pool(DicePool::new().add(Die::D10, 2))
            .at(8.0, 0.0),
    );
    enc.add_participant(
        Participant::new("Warg")
            .with_disposition(Disposition::Hostile)
            .with_pool(DicePool::new().add(Die::D8, 1).add(Die::D4, 2))
            .at(10.0, 4.0),
    );
    enc
}

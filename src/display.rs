use schema::{Creature, MoveRecord};
use std::fmt;

const LABEL_WIDTH: usize = 12;
const ABSENT: &str = "—";

/// Detailed multi-line view of a creature: number, types, stats, evolution.
pub struct CreatureCard<'a>(pub &'a Creature);

/// Detailed multi-line view of a move.
pub struct MoveCard<'a>(pub &'a MoveRecord);

fn or_absent<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| ABSENT.to_string(), |v| v.to_string())
}

impl fmt::Display for CreatureCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let creature = self.0;

        // --- 1. Name and dex number ---
        writeln!(f, "{} (#{:03})", creature.name, creature.id)?;
        writeln!(f, "--------------------")?;

        // --- 2. Types ---
        writeln!(f, "Type(s): {}", creature.types())?;
        writeln!(f, "--------------------")?;

        // --- 3. Base stats ---
        writeln!(f, "Base Stats:")?;
        let stats = &creature.base_stats;
        writeln!(f, "{:<LABEL_WIDTH$} : {}", "HP", stats.hp)?;
        writeln!(f, "{:<LABEL_WIDTH$} : {}", "Attack", stats.attack)?;
        writeln!(f, "{:<LABEL_WIDTH$} : {}", "Defense", stats.defense)?;
        writeln!(f, "{:<LABEL_WIDTH$} : {}", "Sp. Atk", stats.sp_attack)?;
        writeln!(f, "{:<LABEL_WIDTH$} : {}", "Sp. Def", stats.sp_defense)?;
        writeln!(f, "{:<LABEL_WIDTH$} : {}", "Speed", stats.speed)?;
        writeln!(f, "{:<LABEL_WIDTH$} : {}", "Total", creature.total)?;
        writeln!(f, "--------------------")?;

        // --- 4. Evolution ---
        write!(f, "Evolves into: {}", or_absent(creature.evolution.as_deref()))
    }
}

impl fmt::Display for MoveCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let move_ = self.0;
        writeln!(f, "{}", move_.name)?;
        writeln!(f, "--------------------")?;
        writeln!(f, "{:<LABEL_WIDTH$} : {}", "Type", move_.types())?;
        writeln!(f, "{:<LABEL_WIDTH$} : {}", "Category", move_.category)?;
        writeln!(f, "{:<LABEL_WIDTH$} : {}", "Power", or_absent(move_.power))?;
        writeln!(
            f,
            "{:<LABEL_WIDTH$} : {}",
            "Accuracy",
            or_absent(move_.accuracy.map(|acc| format!("{}%", acc)))
        )?;
        write!(f, "{:<LABEL_WIDTH$} : {}", "PP", move_.pp)
    }
}

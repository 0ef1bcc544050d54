//! Commands that read or change the current root and scale.

use crate::cli::common::{print_json, CliError, CliResult, HostContext};
use clap::Args;
use scalekeys::models::Accidentals;
use scalekeys::{HighlightVector, RootNote, Selection};
use serde::Serialize;

/// Display the current root, scale and highlighted keys
#[derive(Args, Debug, Default)]
pub struct ShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Change the root note
#[derive(Args, Debug)]
pub struct RootArgs {
    /// Semitone index (0 = C … 11 = B) or note name (e.g. "F#", "Bb")
    #[arg(value_name = "NOTE", allow_hyphen_values = true)]
    note: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Change the scale
#[derive(Args, Debug)]
pub struct ScaleArgs {
    /// Scale name from `scales` (case-insensitive)
    #[arg(value_name = "NAME")]
    name: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// JSON-serializable selection for output
#[derive(Serialize, Debug)]
struct SelectionOutput {
    root: u8,
    root_name: String,
    scale: String,
    notes: Vec<String>,
    highlight: [bool; 12],
}

impl ShowArgs {
    /// Execute show command
    pub fn execute(&self, ctx: &HostContext) -> CliResult<()> {
        let engine = ctx.engine();
        output(engine.current(), &engine.current_highlight(), ctx.accidentals(), self.json)
    }
}

impl RootArgs {
    /// Execute root command
    pub fn execute(&self, ctx: &HostContext) -> CliResult<()> {
        let root = parse_root_argument(&self.note)?;

        let mut engine = ctx.engine();
        let highlight = engine.change_root(root)?;
        output(engine.current(), &highlight, ctx.accidentals(), self.json)
    }
}

impl ScaleArgs {
    /// Execute scale command
    pub fn execute(&self, ctx: &HostContext) -> CliResult<()> {
        let mut engine = ctx.engine();
        let highlight = engine.change_scale(&self.name).map_err(|e| {
            CliError::validation(format!(
                "{}. Run 'scales' to list available scales",
                e
            ))
        })?;
        output(engine.current(), &highlight, ctx.accidentals(), self.json)
    }
}

/// Turns a NOTE argument into a semitone index.
///
/// Integers are passed through unchecked so the engine reports out-of-range
/// values itself; anything else must be a note name.
fn parse_root_argument(note: &str) -> CliResult<i64> {
    if let Ok(index) = note.trim().parse::<i64>() {
        return Ok(index);
    }

    RootNote::from_name(note)
        .map(|root| i64::from(root.semitone()))
        .ok_or_else(|| {
            CliError::validation(format!(
                "Unknown note '{}'. Use 0-11 or a name such as C, F#, Bb",
                note
            ))
        })
}

fn output(
    selection: Selection,
    highlight: &HighlightVector,
    accidentals: Accidentals,
    json: bool,
) -> CliResult<()> {
    if json {
        print_json(&selection_output(selection, highlight, accidentals))
    } else {
        print!("{}", render_text(selection, highlight, accidentals));
        Ok(())
    }
}

fn selection_output(
    selection: Selection,
    highlight: &HighlightVector,
    accidentals: Accidentals,
) -> SelectionOutput {
    SelectionOutput {
        root: selection.root().semitone(),
        root_name: selection.root().spelled(accidentals).to_string(),
        scale: selection.scale_name().to_string(),
        notes: selection
            .scale()
            .notes(selection.root())
            .into_iter()
            .map(|note| note.spelled(accidentals).to_string())
            .collect(),
        highlight: *highlight.as_array(),
    }
}

/// Human-readable selection: header lines plus a one-octave key row.
fn render_text(
    selection: Selection,
    highlight: &HighlightVector,
    accidentals: Accidentals,
) -> String {
    let notes: Vec<&str> = selection
        .scale()
        .notes(selection.root())
        .into_iter()
        .map(|note| note.spelled(accidentals))
        .collect();

    // Key labels always use single spellings so columns line up.
    let label_spelling = match accidentals {
        Accidentals::Flats => Accidentals::Flats,
        Accidentals::Both | Accidentals::Sharps => Accidentals::Sharps,
    };
    let labels: String = RootNote::all()
        .map(|note| format!("{:<3}", note.spelled(label_spelling)))
        .collect();
    let marks: String = highlight
        .iter()
        .map(|lit| if lit { "●  " } else { "·  " })
        .collect();

    format!(
        "Root:  {}\nScale: {}\nNotes: {}\n\n  {}\n  {}\n",
        selection.root().spelled(accidentals),
        selection.scale_name(),
        notes.join(" "),
        labels.trim_end(),
        marks.trim_end(),
    )
}

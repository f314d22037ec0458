//! Letter-tile preview of the phrase being built

use crate::catalog::WordEntry;
use crate::search::Template;

/// One tile per template slot.
///
/// The pinned adjective fills from the left and the pinned noun from the
/// right; uncovered slots show the template's fixed letter, if any.
pub fn preview(
    template: &Template,
    adjective: Option<&WordEntry>,
    noun: Option<&WordEntry>,
) -> Vec<Option<char>> {
    let len = template.len();
    let mut tiles: Vec<Option<char>> = template.slots().iter().map(|s| s.letter()).collect();

    if let Some(noun) = noun.filter(|n| n.letter_count() <= len) {
        let offset = len - noun.letter_count();
        for (tile, letter) in tiles[offset..].iter_mut().zip(noun.letters()) {
            *tile = Some(letter);
        }
    }

    // adjective last so it wins on any overlap, as it reads first
    if let Some(adjective) = adjective {
        for (tile, letter) in tiles.iter_mut().zip(adjective.letters()) {
            *tile = Some(letter);
        }
    }

    tiles
}

/// Render tiles as text, `_` for blanks
pub fn render_tiles(tiles: &[Option<char>]) -> String {
    tiles.iter().map(|t| t.unwrap_or('_')).collect()
}

//! Ordering passes for media items and subdirectories.

use lumex_model::{DirectoryEntry, MediaItem};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::sorting::keys::natural_cmp;
use crate::sorting::method::{SortCriteria, SortField, SortOrder};

/// Sorts items in place. All sorts are stable and run ascending first;
/// a descending order reverses the result afterwards, which keeps tie
/// behavior identical in both directions.
pub fn sort_items(items: &mut [MediaItem], criteria: SortCriteria) {
    match criteria.field {
        SortField::Name => {
            items.sort_by(|a, b| natural_cmp(&a.name, &b.name));
        }
        SortField::Date => items.sort_by_key(|item| item.taken_at),
        SortField::Rating => {
            items.sort_by_key(|item| item.rating.unwrap_or(0));
        }
        SortField::PersonCount => items.sort_by_key(|item| item.faces.len()),
        SortField::Random => {
            items.sort_by(|a, b| {
                a.name.to_lowercase().cmp(&b.name.to_lowercase())
            });
            seeded_shuffle(items);
        }
    }
    if criteria.order == SortOrder::Descending {
        items.reverse();
    }
}

/// Sorts subdirectories in place by the same criteria as the items.
///
/// Rating and person count have no directory meaning and fall back to
/// the name order. The random canonical pass runs descending, the
/// mirror image of the item pass, so directories land in a visibly
/// different order than their items under the same seed.
pub fn sort_directories(
    directories: &mut [DirectoryEntry],
    criteria: SortCriteria,
) {
    match criteria.field {
        SortField::Name | SortField::Rating | SortField::PersonCount => {
            directories.sort_by(|a, b| natural_cmp(&a.name, &b.name));
        }
        SortField::Date => {
            directories.sort_by_key(|directory| directory.last_modified);
        }
        SortField::Random => {
            directories.sort_by(|a, b| {
                b.name.to_lowercase().cmp(&a.name.to_lowercase())
            });
            seeded_shuffle(directories);
        }
    }
    if criteria.order == SortOrder::Descending {
        directories.reverse();
    }
}

/// Deterministic shuffle seeded by collection size.
///
/// Combined with the canonical sort that precedes it, the same set of
/// entries always lands in the same "random" order, so revisiting a
/// gallery does not reshuffle it.
fn seeded_shuffle<T>(values: &mut [T]) {
    let mut rng = StdRng::seed_from_u64(values.len() as u64);
    values.shuffle(&mut rng);
}

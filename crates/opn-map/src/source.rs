//! The `LocationSource` contract — externally loaded point lists.

use opn_core::Location;

use crate::MapResult;

/// A provider of candidate place coordinates (the `<place>LocationsFile`
/// configuration route).
///
/// File formats and I/O live with the application; the simulator only sees
/// the parsed points.  Points are in the *source* coordinate frame — the
/// consumer applies [`world_point`](crate::world_point) before use.
///
/// A failing or empty source must surface as an `Err` / empty `Vec` here so
/// place construction can abort; silently truncated lists are the one thing
/// implementations must never produce.
pub trait LocationSource {
    fn read_points(&self) -> MapResult<Vec<Location>>;
}

/// In-memory source, mainly for tests and programmatic setups.
pub struct PointList(pub Vec<Location>);

impl LocationSource for PointList {
    fn read_points(&self) -> MapResult<Vec<Location>> {
        Ok(self.0.clone())
    }
}

//! Grid searches: locating the shop anchor and walking the area around it.

use crate::denylist::Denylist;
use crate::env::{ContainerStore, WorldOracle};
use crate::state::{Rect, RectTiles, TilePos, TileTypeId};

/// Finds the first tile registered with `type_id`.
///
/// Scans x-major (x outer, z inner) and returns the first hit in that order,
/// not the nearest one. Reads outside the host arrays count as no match.
///
/// The inner bound is inclusive (`z <= extent`) while the outer one is
/// exclusive (`x < extent`), matching the host's own lookup; the extra row is
/// always outside the grid and reads as no match.
pub fn find_anchor_by_type_id<W>(world: &W, type_id: TileTypeId) -> Option<TilePos>
where
    W: WorldOracle + ?Sized,
{
    let extent = i32::try_from(world.extent()).unwrap_or(i32::MAX);
    (0..extent)
        .flat_map(|x| (0..=extent).map(move |z| TilePos::new(x, z)))
        .find(|&position| world.tile_type_at(position) == Some(type_id))
}

/// Same as [`find_anchor_by_type_id`] but reports absence with [`TilePos::NOT_FOUND`].
pub fn find_anchor_or_sentinel<W>(world: &W, type_id: TileTypeId) -> TilePos
where
    W: WorldOracle + ?Sized,
{
    find_anchor_by_type_id(world, type_id).unwrap_or(TilePos::NOT_FOUND)
}

/// A tile in the scanned region that may hold a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContainerSite {
    pub position: TilePos,
    pub tile_type: TileTypeId,
}

/// Starts a lazy walk over `rect` grown by `margin`, skipping denylisted tiles.
///
/// The grown rectangle is clipped to the grid, so the walk never visits more
/// than `extent × extent` tiles whatever the margin.
pub fn enumerate_region<'a, W>(
    world: &'a W,
    rect: Rect,
    margin: u32,
    denylist: &'a Denylist,
) -> RegionScan<'a, W>
where
    W: WorldOracle + ?Sized,
{
    let region = rect.expand(margin).clamp_to_grid(world.extent());
    RegionScan::new(world, region, denylist)
}

/// Row-major iterator over candidate container sites.
///
/// Tiles outside the grid are skipped. Tiles whose type is denylisted are
/// skipped before anyone asks whether a container sits there. The iterator is
/// finite and `Clone`, so a scan can be restarted from any copy.
pub struct RegionScan<'a, W>
where
    W: WorldOracle + ?Sized,
{
    world: &'a W,
    denylist: &'a Denylist,
    region: Rect,
    tiles: RectTiles,
}

impl<'a, W> RegionScan<'a, W>
where
    W: WorldOracle + ?Sized,
{
    pub fn new(world: &'a W, region: Rect, denylist: &'a Denylist) -> Self {
        Self {
            world,
            denylist,
            region,
            tiles: region.tiles(),
        }
    }

    /// The rectangle being walked.
    pub fn region(&self) -> Rect {
        self.region
    }

    /// Narrows the scan to sites where `store` currently holds a container.
    pub fn containers<'s, S>(self, store: &'s S) -> impl Iterator<Item = ContainerSite>
    where
        S: ContainerStore + ?Sized,
    {
        self.filter(move |site| store.has_container(site.position))
    }
}

impl<W> Clone for RegionScan<'_, W>
where
    W: WorldOracle + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            world: self.world,
            denylist: self.denylist,
            region: self.region,
            tiles: self.tiles.clone(),
        }
    }
}

impl<W> Iterator for RegionScan<'_, W>
where
    W: WorldOracle + ?Sized,
{
    type Item = ContainerSite;

    fn next(&mut self) -> Option<ContainerSite> {
        for position in self.tiles.by_ref() {
            let Some(tile_type) = self.world.tile_type_at(position) else {
                continue;
            };
            if self.denylist.contains(tile_type) {
                continue;
            }
            return Some(ContainerSite {
                position,
                tile_type,
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Container, FootprintSize, Orientation};
    use crate::testing::Fixture;

    #[test]
    fn first_match_in_x_major_order_wins() {
        let mut fixture = Fixture::new(20);
        fixture.set_tile(TilePos::new(5, 1), TileTypeId(8));
        fixture.set_tile(TilePos::new(3, 15), TileTypeId(8));
        fixture.set_tile(TilePos::new(3, 9), TileTypeId(8));

        assert_eq!(
            find_anchor_by_type_id(&fixture, TileTypeId(8)),
            Some(TilePos::new(3, 9))
        );
    }

    #[test]
    fn missing_type_returns_sentinel() {
        let mut fixture = Fixture::new(20);
        fixture.set_tile(TilePos::new(2, 2), TileTypeId(9));

        assert_eq!(find_anchor_by_type_id(&fixture, TileTypeId(8)), None);
        assert_eq!(
            find_anchor_or_sentinel(&fixture, TileTypeId(8)),
            TilePos::NOT_FOUND
        );
        assert!(TilePos::NOT_FOUND.is_not_found());
    }

    #[test]
    fn anchor_on_last_valid_tile_is_found() {
        let mut fixture = Fixture::new(10);
        fixture.set_tile(TilePos::new(9, 9), TileTypeId(8));

        assert_eq!(
            find_anchor_by_type_id(&fixture, TileTypeId(8)),
            Some(TilePos::new(9, 9))
        );
    }

    #[test]
    fn zero_margin_walks_exactly_the_rectangle() {
        let fixture = Fixture::filled(20, TileTypeId(0));
        let rect = Rect::new(TilePos::new(4, 4), TilePos::new(6, 5));
        let denylist = Denylist::default();

        let sites: Vec<_> = enumerate_region(&fixture, rect, 0, &denylist)
            .map(|site| site.position)
            .collect();

        assert_eq!(sites, rect.tiles().collect::<Vec<_>>());
        assert_eq!(sites.len(), 6);
    }

    #[test]
    fn margin_grows_every_side() {
        let fixture = Fixture::filled(20, TileTypeId(0));
        let rect = Rect::new(TilePos::new(4, 4), TilePos::new(6, 5));
        let denylist = Denylist::default();

        let scan = enumerate_region(&fixture, rect, 2, &denylist);
        assert_eq!(
            scan.region(),
            Rect::new(TilePos::new(2, 2), TilePos::new(8, 7))
        );
        assert_eq!(scan.count(), 7 * 6);
    }

    #[test]
    fn region_past_grid_edge_is_clipped() {
        let fixture = Fixture::filled(5, TileTypeId(0));
        let denylist = Denylist::default();

        let scan = enumerate_region(&fixture, Rect::point(TilePos::ORIGIN), 1, &denylist);
        assert_eq!(
            scan.region(),
            Rect::new(TilePos::ORIGIN, TilePos::new(1, 1))
        );

        let sites: Vec<_> = scan.collect();
        assert_eq!(sites.len(), 4);
        assert!(sites.iter().all(|site| site.position.x >= 0 && site.position.z >= 0));
    }

    #[test]
    fn huge_margin_walks_the_grid_once() {
        let fixture = Fixture::filled(6, TileTypeId(0));
        let denylist = Denylist::default();

        let scan = enumerate_region(&fixture, Rect::point(TilePos::new(3, 3)), u32::MAX, &denylist);
        assert_eq!(
            scan.region(),
            Rect::new(TilePos::ORIGIN, TilePos::new(5, 5))
        );
        assert_eq!(scan.count(), 36);
    }

    #[test]
    fn unwritten_tiles_inside_the_grid_are_still_sites() {
        let mut fixture = Fixture::new(8);
        fixture.insert_container(TilePos::new(2, 3), Container::empty());
        let denylist = Denylist::default();

        let found: Vec<_> = enumerate_region(&fixture, Rect::point(TilePos::new(2, 2)), 1, &denylist)
            .containers(&fixture)
            .collect();

        assert_eq!(
            found,
            vec![ContainerSite {
                position: TilePos::new(2, 3),
                tile_type: TileTypeId::EMPTY,
            }]
        );
    }

    #[test]
    fn denylisted_tiles_are_never_yielded() {
        let mut fixture = Fixture::filled(20, TileTypeId(0));
        fixture.set_tile(TilePos::new(5, 5), TileTypeId(210));
        fixture.insert_container(TilePos::new(5, 5), Container::empty());
        fixture.set_tile(TilePos::new(5, 6), TileTypeId(211));
        fixture.insert_container(TilePos::new(5, 6), Container::empty());

        let denylist = Denylist::parse("210").denylist;
        let found: Vec<_> = enumerate_region(
            &fixture,
            Rect::new(TilePos::new(5, 5), TilePos::new(5, 6)),
            0,
            &denylist,
        )
        .containers(&fixture)
        .collect();

        assert_eq!(
            found,
            vec![ContainerSite {
                position: TilePos::new(5, 6),
                tile_type: TileTypeId(211),
            }]
        );
    }

    #[test]
    fn scan_can_restart_from_a_clone() {
        let fixture = Fixture::filled(10, TileTypeId(1));
        let denylist = Denylist::default();
        let mut scan = enumerate_region(&fixture, Rect::point(TilePos::new(3, 3)), 1, &denylist);

        let restart = scan.clone();
        scan.next();
        assert_eq!(scan.count(), 8);
        assert_eq!(restart.count(), 9);
    }

    #[test]
    fn shop_footprint_feeds_the_scan() {
        let mut fixture = Fixture::filled(30, TileTypeId(0));
        fixture.place(
            TilePos::new(10, 10),
            TileTypeId(8),
            Orientation::East,
            FootprintSize::new(3, 2),
        );
        fixture.insert_container(TilePos::new(9, 13), Container::empty());
        fixture.insert_container(TilePos::new(14, 10), Container::empty());

        let anchor = find_anchor_by_type_id(&fixture, TileTypeId(8)).unwrap();
        let rect = crate::footprint_at(&fixture, anchor);
        let denylist = Denylist::default();
        let found: Vec<_> = enumerate_region(&fixture, rect, 1, &denylist)
            .containers(&fixture)
            .map(|site| site.position)
            .collect();

        // East-facing 3x2 covers (10..=11, 10..=12); margin 1 reaches (9..=12, 9..=13).
        assert_eq!(found, vec![TilePos::new(9, 13)]);
    }
}

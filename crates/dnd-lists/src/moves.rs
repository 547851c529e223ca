//! Move Engine
//!
//! The only path that changes list membership. Every operation here ends in
//! list-changed notifications, so bindings and views are consistent by the
//! time it returns.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{DndError, Result};
use crate::model::{ItemId, ListId};
use crate::workspace::Workspace;

/// Items to append to `target`, and the lists to notify afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveMapping {
    pub target: ListId,
    pub items: Vec<ItemId>,
    /// Lists the items came from; only used for notification
    pub sources: Vec<ListId>,
}

impl MoveMapping {
    pub fn new(target: ListId, items: Vec<ItemId>) -> Self {
        Self {
            target,
            items,
            sources: Vec::new(),
        }
    }

    pub fn from_sources(mut self, sources: Vec<ListId>) -> Self {
        self.sources = sources;
        self
    }
}

/// Split `total` items over `buckets` as evenly as possible; the first
/// `total % buckets` buckets take one extra.
pub fn partition_sizes(total: usize, buckets: usize) -> Vec<usize> {
    if buckets == 0 {
        return Vec::new();
    }
    let base = total / buckets;
    let remainder = total % buckets;
    (0..buckets)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect()
}

impl Workspace {
    /// Move items between lists.
    ///
    /// Mappings run strictly in order. Each item is detached from wherever it
    /// is and appended to the mapping's target, keeping the given order.
    /// Observers only run once a mapping's membership change is complete:
    /// the target first, then each distinct source.
    pub fn batch_move(&mut self, mappings: Vec<MoveMapping>) -> Result<()> {
        for mapping in &mappings {
            self.validate(mapping)?;
        }
        for mapping in mappings {
            self.apply(mapping)?;
        }
        Ok(())
    }

    /// Move every item of every other list into the return list.
    pub fn return_items(&mut self) -> Result<()> {
        let target = self.return_list.ok_or(DndError::NoReturnList)?;
        let sources = self.target_lists();
        let items = sources
            .iter()
            .flat_map(|l| self.lists[l.0].items.iter().copied())
            .collect::<Vec<_>>();
        tracing::debug!(count = items.len(), "returning all items");
        self.batch_move(vec![MoveMapping::new(target, items).from_sources(sources)])
    }

    /// Move a single item back into the return list.
    pub fn return_item(&mut self, item: ItemId) -> Result<()> {
        let target = self.return_list.ok_or(DndError::NoReturnList)?;
        let source = self.list_of(item)?;
        self.batch_move(vec![MoveMapping::new(target, vec![item]).from_sources(vec![source])])
    }

    /// Deal the return list's items out over every other list at random.
    ///
    /// Each target receives `n / k` items, the first `n % k` one more. The
    /// return list is notified once at the end instead of once per target.
    pub fn randomise<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let pool_list = self.return_list.ok_or(DndError::NoReturnList)?;
        let targets = self.target_lists();
        let mut pool = self.lists[pool_list.0].items.clone();
        if targets.is_empty() || pool.is_empty() {
            tracing::debug!(
                targets = targets.len(),
                pool = pool.len(),
                "nothing to randomise"
            );
            return Ok(());
        }

        pool.shuffle(rng);
        let sizes = partition_sizes(pool.len(), targets.len());
        let mut rest = pool.as_slice();
        let mut mappings = Vec::with_capacity(targets.len());
        for (target, size) in targets.into_iter().zip(sizes) {
            let (chunk, tail) = rest.split_at(size);
            mappings.push(MoveMapping::new(target, chunk.to_vec()));
            rest = tail;
        }

        self.check_configured(pool_list)?;
        for mapping in &mappings {
            self.validate(mapping)?;
        }
        for mapping in mappings {
            self.batch_move(vec![mapping])?;
        }
        self.notify(pool_list)
    }

    fn validate(&self, mapping: &MoveMapping) -> Result<()> {
        self.check_configured(mapping.target)?;
        for source in &mapping.sources {
            self.check_configured(*source)?;
        }
        for item in &mapping.items {
            self.item(*item)?;
        }
        Ok(())
    }

    fn apply(&mut self, mapping: MoveMapping) -> Result<()> {
        let MoveMapping {
            target,
            items,
            sources,
        } = mapping;
        tracing::debug!(%target, count = items.len(), "batch move");
        for item in items {
            self.relocate(item, target);
        }

        self.notify(target)?;
        let mut notified = vec![target];
        for source in sources {
            if !notified.contains(&source) {
                self.notify(source)?;
                notified.push(source);
            }
        }
        Ok(())
    }

    fn relocate(&mut self, item: ItemId, target: ListId) {
        let from = self.owner[item.0];
        self.lists[from.0].items.retain(|i| *i != item);
        self.lists[target.0].items.push(item);
        self.owner[item.0] = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ListSpec, WorkspaceLayout};
    use crate::options::DndOptions;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn workspace(lists: Vec<ListSpec>) -> Workspace {
        Workspace::initialize(WorkspaceLayout { lists }, DndOptions::default()).unwrap()
    }

    fn values(ws: &Workspace, name: &str) -> Vec<String> {
        ws.values_in(ws.find_list(name).unwrap()).unwrap()
    }

    fn fields(ws: &Workspace, name: &str) -> Vec<String> {
        ws.items_in(ws.find_list(name).unwrap())
            .unwrap()
            .map(|i| i.field_name.clone())
            .collect()
    }

    fn item_by_value(ws: &Workspace, value: &str) -> ItemId {
        (0..ws.item_count())
            .map(ItemId)
            .find(|id| ws.item(*id).unwrap().value == value)
            .unwrap()
    }

    #[test]
    fn test_partition_sizes() {
        assert_eq!(partition_sizes(3, 2), [2, 1]);
        assert_eq!(partition_sizes(10, 3), [4, 3, 3]);
        assert_eq!(partition_sizes(2, 4), [1, 1, 0, 0]);
        assert_eq!(partition_sizes(0, 2), [0, 0]);
        assert!(partition_sizes(5, 0).is_empty());
    }

    #[test]
    fn test_moving_out_rebinds_remaining() {
        let mut ws = workspace(vec![
            ListSpec::bound("selected", "cmd.sel").with_items(["x", "y", "z"]),
            ListSpec::bound("other", "cmd.other"),
        ]);
        let selected = ws.find_list("selected").unwrap();
        let other = ws.find_list("other").unwrap();
        let y = item_by_value(&ws, "y");

        ws.batch_move(vec![MoveMapping::new(other, vec![y]).from_sources(vec![selected])])
            .unwrap();

        assert_eq!(values(&ws, "selected"), ["x", "z"]);
        assert_eq!(fields(&ws, "selected"), ["cmd.sel[0]", "cmd.sel[1]"]);
        assert_eq!(fields(&ws, "other"), ["cmd.other[0]"]);
    }

    #[test]
    fn test_batch_move_appends_in_order() {
        let mut ws = workspace(vec![
            ListSpec::bound("a", "a").with_items(["1", "2", "3"]),
            ListSpec::bound("b", "b").with_items(["4"]),
        ]);
        let a = ws.find_list("a").unwrap();
        let b = ws.find_list("b").unwrap();
        let moved = vec![item_by_value(&ws, "3"), item_by_value(&ws, "1"), item_by_value(&ws, "3")];

        ws.batch_move(vec![MoveMapping::new(b, moved).from_sources(vec![a])]).unwrap();

        assert_eq!(values(&ws, "a"), ["2"]);
        assert_eq!(values(&ws, "b"), ["4", "1", "3"]);
    }

    #[test]
    fn test_nobind_target_blanks_names() {
        let mut ws = workspace(vec![
            ListSpec::bound("a", "a").with_items(["1", "2"]),
            ListSpec {
                name: "bin".to_string(),
                binding: crate::model::Binding::NoBind,
                ..Default::default()
            },
        ]);
        let a = ws.find_list("a").unwrap();
        let bin = ws.find_list("bin").unwrap();
        let one = item_by_value(&ws, "1");
        ws.batch_move(vec![MoveMapping::new(bin, vec![one]).from_sources(vec![a])]).unwrap();
        assert_eq!(fields(&ws, "bin"), [""]);
        assert_eq!(fields(&ws, "a"), ["a[0]"]);
    }

    #[test]
    fn test_invalid_mapping_leaves_state_untouched() {
        let mut ws = workspace(vec![
            ListSpec::bound("a", "a").with_items(["1"]),
            ListSpec::bound("b", "b"),
        ]);
        let b = ws.find_list("b").unwrap();
        let one = item_by_value(&ws, "1");
        let err = ws
            .batch_move(vec![
                MoveMapping::new(b, vec![one]),
                MoveMapping::new(ListId(7), vec![one]),
            ])
            .unwrap_err();
        assert!(matches!(err, DndError::UnknownList(ListId(7))));
        assert_eq!(values(&ws, "a"), ["1"]);
        assert!(values(&ws, "b").is_empty());
    }

    #[test]
    fn test_return_items() {
        let mut ws = workspace(vec![
            ListSpec::bound("t1", "t1").with_items(["3"]).with_counter(),
            ListSpec::bound("pool", "pool").with_items(["1"]).as_return_list().with_counter(),
            ListSpec::bound("t2", "t2").with_items(["4", "5"]),
        ]);
        ws.return_items().unwrap();

        assert_eq!(values(&ws, "pool"), ["1", "3", "4", "5"]);
        assert_eq!(fields(&ws, "pool"), ["pool[0]", "pool[1]", "pool[2]", "pool[3]"]);
        assert!(values(&ws, "t1").is_empty());
        assert!(values(&ws, "t2").is_empty());
        let t1 = ws.find_list("t1").unwrap();
        let pool = ws.find_list("pool").unwrap();
        assert_eq!(ws.list(t1).unwrap().counter().unwrap().count(), 0);
        assert_eq!(ws.list(pool).unwrap().counter().unwrap().count(), 4);
    }

    #[test]
    fn test_return_without_return_list() {
        let mut ws = workspace(vec![ListSpec::bound("a", "a").with_items(["1"])]);
        assert!(matches!(ws.return_items(), Err(DndError::NoReturnList)));
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(ws.randomise(&mut rng), Err(DndError::NoReturnList)));
        assert!(matches!(ws.return_item(ItemId(0)), Err(DndError::NoReturnList)));
    }

    #[test]
    fn test_randomise_three_over_two() {
        let mut ws = workspace(vec![
            ListSpec::bound("R", "r").with_items(["A", "B", "C"]).as_return_list(),
            ListSpec::bound("T1", "t1"),
            ListSpec::bound("T2", "t2"),
        ]);
        let mut rng = StdRng::seed_from_u64(42);
        ws.randomise(&mut rng).unwrap();

        assert!(values(&ws, "R").is_empty());
        let t1 = values(&ws, "T1");
        let t2 = values(&ws, "T2");
        assert_eq!(t1.len(), 2);
        assert_eq!(t2.len(), 1);
        let mut all: Vec<_> = t1.into_iter().chain(t2).collect();
        all.sort();
        assert_eq!(all, ["A", "B", "C"]);
        assert_eq!(fields(&ws, "T1"), ["t1[0]", "t1[1]"]);
    }

    #[test]
    fn test_randomise_empty_pool_is_noop() {
        let mut ws = workspace(vec![
            ListSpec::bound("R", "r").as_return_list(),
            ListSpec::bound("T1", "t1").with_items(["A"]),
        ]);
        let events = std::rc::Rc::new(std::cell::Cell::new(0));
        let seen = events.clone();
        ws.subscribe(move |_| seen.set(seen.get() + 1));

        let mut rng = StdRng::seed_from_u64(3);
        ws.randomise(&mut rng).unwrap();
        assert_eq!(values(&ws, "T1"), ["A"]);
        assert_eq!(events.get(), 0);
    }

    #[test]
    fn test_randomise_without_targets_is_noop() {
        let mut ws = workspace(vec![ListSpec::bound("R", "r").with_items(["A", "B"]).as_return_list()]);
        let mut rng = StdRng::seed_from_u64(3);
        ws.randomise(&mut rng).unwrap();
        assert_eq!(values(&ws, "R"), ["A", "B"]);
    }

    #[test]
    fn test_randomise_notifies_pool_once() {
        let mut ws = workspace(vec![
            ListSpec::bound("R", "r").with_items(["A", "B", "C", "D"]).as_return_list(),
            ListSpec::bound("T1", "t1"),
            ListSpec::bound("T2", "t2"),
            ListSpec::bound("T3", "t3"),
        ]);
        let pool = ws.return_list().unwrap();
        let order = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let seen = order.clone();
        ws.subscribe(move |ev| seen.borrow_mut().push(ev.list));

        let mut rng = StdRng::seed_from_u64(9);
        ws.randomise(&mut rng).unwrap();

        let order = order.borrow();
        assert_eq!(order.iter().filter(|l| **l == pool).count(), 1);
        assert_eq!(order.last(), Some(&pool));
        assert_eq!(order.len(), 4);
    }
}

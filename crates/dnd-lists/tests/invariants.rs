//! Property tests: membership, bindings and counters stay consistent over
//! arbitrary sequences of moves.

use dnd_lists::{
    partition_sizes, Binding, DndOptions, ItemId, ListId, ListSpec, MoveMapping, Workspace,
    WorkspaceLayout,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone)]
enum Op {
    Move { items: Vec<usize>, target: usize },
    ReturnAll,
    ReturnOne(usize),
    Randomise(u64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (prop::collection::vec(any::<usize>(), 1..4), any::<usize>())
            .prop_map(|(items, target)| Op::Move { items, target }),
        1 => Just(Op::ReturnAll),
        1 => any::<usize>().prop_map(Op::ReturnOne),
        1 => any::<u64>().prop_map(Op::Randomise),
    ]
}

fn build(sizes: &[usize], nobind_last: bool) -> Workspace {
    let mut next = 0;
    let lists = sizes
        .iter()
        .enumerate()
        .map(|(i, size)| {
            let values: Vec<String> = (next..next + size).map(|v| format!("{:04}", v)).collect();
            next += size;
            let mut spec = ListSpec::bound(format!("list-{}", i), format!("command.list{}", i))
                .with_items(values)
                .with_counter();
            if i == 0 {
                spec = spec.as_return_list();
            }
            if nobind_last && i == sizes.len() - 1 && i != 0 {
                spec.binding = Binding::NoBind;
            }
            spec
        })
        .collect();
    Workspace::initialize(WorkspaceLayout { lists }, DndOptions::default()).unwrap()
}

fn apply(ws: &mut Workspace, op: &Op) {
    let lists = ws.lists().len();
    let items = ws.item_count();
    match op {
        Op::Move { items: picks, target } => {
            if items == 0 {
                return;
            }
            let moved: Vec<ItemId> = picks.iter().map(|p| ItemId(p % items)).collect();
            let mut sources: Vec<ListId> = moved.iter().map(|i| ws.list_of(*i).unwrap()).collect();
            sources.dedup();
            let target = ListId(target % lists);
            ws.batch_move(vec![MoveMapping::new(target, moved).from_sources(sources)])
                .unwrap();
        }
        Op::ReturnAll => ws.return_items().unwrap(),
        Op::ReturnOne(pick) => {
            if items > 0 {
                ws.return_item(ItemId(pick % items)).unwrap();
            }
        }
        Op::Randomise(seed) => {
            let mut rng = StdRng::seed_from_u64(*seed);
            ws.randomise(&mut rng).unwrap();
        }
    }
}

fn check(ws: &Workspace) {
    let mut seen = vec![0usize; ws.item_count()];
    for list in ws.lists() {
        for (index, id) in list.items().iter().enumerate() {
            seen[id.0] += 1;
            assert_eq!(ws.list_of(*id).unwrap(), list.id);
            let expected = list.binding.field_name(index).unwrap();
            assert_eq!(ws.item(*id).unwrap().field_name, expected);
        }
        assert_eq!(list.counter().unwrap().count(), list.len());
    }
    assert!(seen.iter().all(|n| *n == 1), "membership not exclusive: {:?}", seen);
}

proptest! {
    #[test]
    fn moves_keep_workspace_consistent(
        sizes in prop::collection::vec(0usize..6, 1..5),
        nobind_last in any::<bool>(),
        ops in prop::collection::vec(op(), 0..20),
    ) {
        let mut ws = build(&sizes, nobind_last);
        check(&ws);
        for op in &ops {
            apply(&mut ws, op);
            check(&ws);
        }
    }

    #[test]
    fn return_all_collects_everything(
        sizes in prop::collection::vec(0usize..6, 1..5),
        seed in any::<u64>(),
    ) {
        let mut ws = build(&sizes, false);
        let mut rng = StdRng::seed_from_u64(seed);
        ws.randomise(&mut rng).unwrap();
        ws.return_items().unwrap();

        let pool = ws.return_list().unwrap();
        prop_assert_eq!(ws.list(pool).unwrap().len(), ws.item_count());
        for target in ws.target_lists() {
            prop_assert!(ws.list(target).unwrap().is_empty());
        }
    }

    #[test]
    fn randomise_is_balanced(n in 0usize..40, k in 1usize..6, seed in any::<u64>()) {
        let mut sizes = vec![n];
        sizes.extend(std::iter::repeat(0).take(k));
        let mut ws = build(&sizes, false);
        let mut rng = StdRng::seed_from_u64(seed);
        ws.randomise(&mut rng).unwrap();

        let pool = ws.return_list().unwrap();
        prop_assert!(ws.list(pool).unwrap().is_empty() || n == 0);
        let counts: Vec<usize> = ws.target_lists().iter().map(|l| ws.list(*l).unwrap().len()).collect();
        prop_assert_eq!(counts.iter().sum::<usize>(), n);
        for count in &counts {
            prop_assert!(*count == n / k || *count == n / k + 1);
        }
        prop_assert_eq!(counts, partition_sizes(n, k));
    }
}

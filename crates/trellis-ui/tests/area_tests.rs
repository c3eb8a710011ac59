//! Structural tests for area trees: split, merge, visibility and content.

use trellis_core::config::AreaConfig;
use trellis_core::geometry::Size;
use trellis_test_utils::RecordingHost;
use trellis_ui::area::{AreaTree, ContentChild, Direction};
use trellis_ui::error::AreaError;
use trellis_ui::size::{SizeExpr, SizeSpec};
use trellis_ui::surface::{SurfaceHost, SurfaceKind};

fn tree() -> AreaTree<RecordingHost> {
    AreaTree::new(RecordingHost::new(Size::new(400.0, 300.0)))
}

#[test]
fn test_split_has_exactly_one_dynamic_section() {
    for direction in [Direction::Vertical, Direction::Horizontal] {
        for dynamic in 0..2 {
            let mut tree = tree();
            let root = tree.create_area(None, None);
            let mut sizes = [Some(SizeSpec::percent(40.0)), Some(SizeSpec::percent(40.0))];
            sizes[dynamic] = None;

            let sections = tree.split(root, direction, sizes, true).unwrap();
            let node = tree.node(root).unwrap();
            assert_eq!(node.sections(), &sections);
            assert_eq!(node.direction(), direction);
            assert_eq!(node.dynamic_section(), Some(sections[dynamic]));
            assert_eq!(tree.node(sections[dynamic]).unwrap().size(), None);
            assert_eq!(
                tree.node(sections[1 - dynamic]).unwrap().size(),
                Some(SizeExpr::Percent(40.0))
            );
        }
    }
}

#[test]
fn test_split_twice_fails_without_changes() {
    let mut tree = tree();
    let root = tree.create_area(None, None);
    let sections = tree
        .split(root, Direction::Vertical, [Some(100.into()), None], true)
        .unwrap();
    let nodes = tree.len();
    let creates = tree.host().count_creates();

    assert_eq!(
        tree.split(root, Direction::Horizontal, [Some(50.into()), None], false),
        Err(AreaError::AlreadySplit(root))
    );
    assert_eq!(tree.len(), nodes);
    assert_eq!(tree.host().count_creates(), creates);
    assert_eq!(tree.node(root).unwrap().sections(), &sections);
    assert_eq!(tree.node(root).unwrap().direction(), Direction::Vertical);
}

#[test]
fn test_split_moves_existing_content_into_first_section() {
    let mut tree = tree();
    let root = tree.create_area(None, None);
    let canvas = tree
        .host_mut()
        .create_surface(SurfaceKind::Custom("canvas".into()));
    tree.add(root, canvas).unwrap();

    let [first, second] = tree
        .split(root, Direction::Horizontal, [Some(SizeSpec::percent(25.0)), None], false)
        .unwrap();
    assert_eq!(
        tree.content_children(first).unwrap(),
        &[ContentChild::Foreign(canvas)]
    );
    assert!(tree.content_children(second).unwrap().is_empty());
    assert!(
        tree.host()
            .is_within(canvas, tree.node(first).unwrap().surface())
    );
}

#[test]
fn test_merge_restores_chosen_content() {
    let mut tree = tree();
    let root = tree.create_area(None, None);
    let [first, second] = tree
        .split(root, Direction::Vertical, [Some(100.into()), None], true)
        .unwrap();
    let second_content = tree.node(second).unwrap().content();
    let kept = tree
        .host_mut()
        .create_surface(SurfaceKind::Custom("kept".into()));
    let dropped = tree
        .host_mut()
        .create_surface(SurfaceKind::Custom("dropped".into()));
    tree.add(second, kept).unwrap();
    tree.add(first, dropped).unwrap();

    tree.merge(root, 1).unwrap();

    let node = tree.node(root).unwrap();
    assert!(node.sections().is_empty());
    assert_eq!(node.direction(), Direction::None);
    assert_eq!(node.dynamic_section(), None);
    assert!(node.splitbar().is_none());
    assert_eq!(node.content(), second_content);
    assert_eq!(tree.host().parent(second_content), Some(node.surface()));
    assert!(tree.host().contains(kept));
    assert!(!tree.host().contains(dropped));
    assert!(!tree.contains(first));
    assert!(!tree.contains(second));
    assert!(tree.query(root, ".splitbar").unwrap().is_empty());

    tree.split(root, Direction::Horizontal, [None, Some(50.into())], false)
        .unwrap();
}

#[test]
fn test_merge_unsplit_fails() {
    let mut tree = tree();
    let root = tree.create_area(None, None);
    let content = tree.node(root).unwrap().content();
    assert_eq!(tree.merge(root, 0), Err(AreaError::NotSplit(root)));
    assert_eq!(tree.node(root).unwrap().content(), content);
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_merge_discards_nested_splits() {
    let mut tree = tree();
    let root = tree.create_area(None, None);
    let [first, second] = tree
        .split(root, Direction::Vertical, [Some(SizeSpec::percent(50.0)), None], true)
        .unwrap();
    tree.split(second, Direction::Horizontal, [None, Some(80.into())], true)
        .unwrap();
    let content = tree.node(first).unwrap().content();

    tree.merge(root, 0).unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.node(root).unwrap().content(), content);
    assert!(tree.query(root, "area").unwrap().is_empty());
    assert!(tree.query(root, "splitbar").unwrap().is_empty());
}

#[test]
fn test_hide_then_show_restores_complement_sizes() {
    let mut tree = tree();
    let root = tree.create_area(None, None);
    let [first, second] = tree
        .split(root, Direction::Vertical, [Some(100.into()), None], true)
        .unwrap();

    tree.hide_section(root, 0).unwrap();
    assert!(!tree.is_section_visible(root, 0));
    assert_eq!(tree.rendered_size(first).unwrap(), Size::ZERO);
    assert_eq!(tree.rendered_size(second).unwrap().height, 300.0);

    tree.show_section(root, 0).unwrap();
    assert_eq!(tree.rendered_size(first).unwrap().height, 100.0);
    assert_eq!(tree.rendered_size(second).unwrap().height, 196.0);

    tree.hide_section(root, 1).unwrap();
    assert_eq!(tree.rendered_size(first).unwrap().height, 300.0);
    tree.show_section(root, 1).unwrap();
    assert_eq!(tree.rendered_size(first).unwrap().height, 100.0);
    assert_eq!(tree.rendered_size(second).unwrap().height, 196.0);
}

#[test]
fn test_show_without_dynamic_section_defaults_to_even_split() {
    let mut tree = tree();
    let root = tree.create_area(None, None);
    let [first, second] = tree
        .split(
            root,
            Direction::Vertical,
            [Some(SizeSpec::percent(30.0)), Some(SizeSpec::percent(70.0))],
            false,
        )
        .unwrap();
    assert_eq!(tree.node(root).unwrap().dynamic_section(), None);

    tree.hide_section(root, 0).unwrap();
    tree.show_section(root, 0).unwrap();
    assert_eq!(tree.rendered_size(first).unwrap().height, 150.0);
    assert_eq!(tree.rendered_size(second).unwrap().height, 150.0);
}

#[test]
fn test_hide_then_show_restores_moved_sizes() {
    let mut tree = tree();
    let root = tree.create_area(None, None);
    let [first, second] = tree
        .split(
            root,
            Direction::Vertical,
            [Some(SizeSpec::percent(30.0)), Some(SizeSpec::percent(70.0))],
            false,
        )
        .unwrap();
    tree.move_split(root, 20.0).unwrap();
    assert_eq!(
        tree.node(second).unwrap().size(),
        Some(SizeExpr::Px(110.0).complement(0.0))
    );

    tree.hide_section(root, 0).unwrap();
    tree.show_section(root, 0).unwrap();
    assert_eq!(tree.rendered_size(first).unwrap().height, 110.0);
    assert_eq!(tree.rendered_size(second).unwrap().height, 190.0);

    tree.hide_section(root, 1).unwrap();
    tree.show_section(root, 1).unwrap();
    assert_eq!(tree.rendered_size(first).unwrap().height, 110.0);
    assert_eq!(tree.rendered_size(second).unwrap().height, 190.0);
}

#[test]
fn test_split_default_uses_configured_percent() {
    let mut tree = tree();
    let root = tree.create_area(None, None);
    let [first, second] = tree.split_default(root, Direction::Vertical, true).unwrap();
    assert_eq!(tree.node(root).unwrap().dynamic_section(), Some(second));
    assert_eq!(tree.node(first).unwrap().size(), Some(SizeExpr::Percent(50.0)));
    assert_eq!(tree.rendered_size(first).unwrap().height, 150.0);
    assert_eq!(tree.rendered_size(second).unwrap().height, 146.0);

    let config = AreaConfig::default().default_split_percent(25.0);
    let mut tree = AreaTree::with_config(RecordingHost::new(Size::new(400.0, 300.0)), config);
    let root = tree.create_area(None, None);
    let [first, second] = tree.split_default(root, Direction::Horizontal, false).unwrap();
    assert_eq!(tree.rendered_size(first).unwrap().width, 100.0);
    assert_eq!(tree.rendered_size(second).unwrap().width, 300.0);
    assert_eq!(
        tree.split_default(root, Direction::Vertical, false),
        Err(AreaError::AlreadySplit(root))
    );
}

#[test]
fn test_visibility_calls_are_idempotent() {
    let mut tree = tree();
    let root = tree.create_area(None, None);
    tree.split(root, Direction::Vertical, [Some(100.into()), None], true)
        .unwrap();

    tree.host().clear_calls();
    tree.show_section(root, 0).unwrap();
    assert!(tree.host().calls().is_empty());

    tree.hide_section(root, 1).unwrap();
    tree.host().clear_calls();
    tree.hide_section(root, 1).unwrap();
    assert!(tree.host().calls().is_empty());
}

#[test]
fn test_section_errors() {
    let mut tree = tree();
    let root = tree.create_area(None, None);
    assert_eq!(tree.hide_section(root, 0), Err(AreaError::NotSplit(root)));
    tree.split(root, Direction::Vertical, [Some(100.into()), None], true)
        .unwrap();
    assert_eq!(tree.show_section(root, 2), Err(AreaError::InvalidSection(2)));
    assert_eq!(tree.merge(root, 5), Err(AreaError::InvalidSection(5)));
}

#[test]
fn test_non_editable_horizontal_split() {
    let mut tree = tree();
    let root = tree.create_area(None, None);
    let [first, second] = tree
        .split(
            root,
            Direction::Horizontal,
            [None, Some("30%".parse().unwrap())],
            false,
        )
        .unwrap();

    assert!(tree.node(root).unwrap().splitbar().is_none());
    assert!(tree.query(root, ".splitbar").unwrap().is_empty());
    assert_eq!(tree.node(first).unwrap().size(), None);
    assert_eq!(
        tree.node(second).unwrap().size(),
        Some(SizeExpr::Percent(30.0))
    );
    assert_eq!(tree.rendered_size(first).unwrap(), Size::new(280.0, 300.0));
    assert_eq!(tree.rendered_size(second).unwrap(), Size::new(120.0, 300.0));
}

#[test]
fn test_adjust_height_fills_below_offset() {
    let mut tree = tree();
    let root = tree.create_area(None, None);
    let root_surface = tree.node(root).unwrap().surface();
    let host = tree.host_mut();
    let page = host.create_surface(SurfaceKind::Custom("page".into()));
    let header = host.create_surface(SurfaceKind::Custom("header".into()));
    host.set_height(header, Some(SizeExpr::Px(50.0)));
    host.append_child(page, header);
    host.append_child(page, root_surface);

    tree.adjust_height(root).unwrap();
    assert_eq!(tree.rendered_size(root).unwrap(), Size::new(400.0, 250.0));
}

#[test]
fn test_names_are_queryable() {
    let mut tree = tree();
    let root = tree.create_area(None, None);
    let [_, second] = tree
        .split(root, Direction::Vertical, [Some(100.into()), None], false)
        .unwrap();
    tree.set_id(second, "output").unwrap();

    assert_eq!(tree.id(second), Some("output"));
    assert_eq!(
        tree.query(root, "#output").unwrap(),
        vec![tree.node(second).unwrap().surface()]
    );
}

#[test]
fn test_remove_area_destroys_every_surface() {
    let mut tree = tree();
    let root = tree.create_area(None, None);
    let [first, _] = tree
        .split(root, Direction::Vertical, [Some(100.into()), None], true)
        .unwrap();
    let nested = tree.create_area(None, None);
    tree.add(first, nested).unwrap();
    tree.add(first, "<h1>title</h1>").unwrap();
    assert_eq!(tree.remove_area(first), Err(AreaError::NotARoot(first)));

    tree.remove_area(root).unwrap();
    assert!(tree.is_empty());
    assert!(tree.host().inner().is_empty());
}

#[test]
fn test_config_seeds_node_defaults() {
    let config = AreaConfig::default()
        .min_split_size(30.0)
        .splitbar_thickness(6.0);
    let mut tree = AreaTree::with_config(RecordingHost::new(Size::new(400.0, 300.0)), config);
    let root = tree.create_area(None, None);
    let [first, second] = tree
        .split(root, Direction::Vertical, [Some(100.into()), None], true)
        .unwrap();

    assert_eq!(tree.node(first).unwrap().min_split_size(), 30.0);
    assert_eq!(tree.node(root).unwrap().splitbar().unwrap().thickness(), 6.0);
    assert_eq!(tree.rendered_size(second).unwrap().height, 194.0);
}

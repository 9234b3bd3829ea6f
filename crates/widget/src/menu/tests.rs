//! Tests for the menu module.
use crate::core::keyboard::{self, Key, Modifiers, key::Named};
use crate::core::time::{Duration, Instant};
use crate::core::{Event, Id, Point, Rectangle, Shell, Size, mouse, window};
use crate::menu::{Entry, List, ListKey, Menu, Node, NodeKey, Origin, Settings, Tree};

const ROW: f32 = 20.0;
const WIDTH: f32 = 100.0;

#[derive(Debug, Clone, PartialEq)]
enum Message {
    Focused(NodeKey),
    Blurred,
    Selected(NodeKey),
}

fn sample() -> Vec<Entry> {
    vec![
        Entry::item("Apple"),
        Entry::with_children(
            "Edit",
            vec![
                Entry::item("Copy"),
                Entry::with_children("Transform", vec![Entry::item("Upper"), Entry::item("Lower")]),
                Entry::item("Paste"),
            ],
        ),
        Entry::item("Apricot"),
        Entry::with_children("View", vec![Entry::item("Zoom")]),
        Entry::text("Heading"),
        Entry::item("Banana").disabled(true),
        Entry::item("Quit").id("quit"),
    ]
}

/// Lays every list out as a column of rows, sized to fit its content.
fn layout(menu: &mut Menu<Message>) {
    for list in menu.tree().walk() {
        let children = menu
            .tree()
            .list(list)
            .map(|list| list.children().to_vec())
            .unwrap_or_default();

        for (i, child) in children.iter().enumerate() {
            menu.set_bounds(
                *child,
                Rectangle::new(Point::new(0.0, i as f32 * ROW), Size::new(WIDTH, ROW)),
            );
        }

        let position = menu.placement_of(list).unwrap_or(Point::ORIGIN);

        menu.set_viewport(
            list,
            Rectangle::new(position, Size::new(WIDTH, children.len() as f32 * ROW)),
        );
    }
}

struct Harness {
    menu: Menu<Message>,
    messages: Vec<Message>,
    now: Instant,
}

impl Harness {
    fn new(entries: Vec<Entry>) -> Self {
        Self::with_settings(entries, Settings::default())
    }

    fn with_settings(entries: Vec<Entry>, settings: Settings) -> Self {
        let mut menu = Menu::new(Tree::new(entries), settings)
            .on_focus(Message::Focused)
            .on_blur(Message::Blurred)
            .on_select(Message::Selected);

        layout(&mut menu);

        Self {
            menu,
            messages: Vec::new(),
            now: Instant::now(),
        }
    }

    fn key(&self, text: &str) -> NodeKey {
        self.menu.tree().find(text).expect(text)
    }

    fn submenu(&self, text: &str) -> ListKey {
        let key = self.key(text);

        self.menu
            .tree()
            .node(key)
            .and_then(Node::submenu)
            .expect("submenu")
    }

    /// Returns whether the event was captured and whether its default
    /// behavior was prevented.
    fn update(&mut self, event: Event) -> (bool, bool) {
        let mut shell = Shell::new(&mut self.messages);
        self.menu.update(&event, self.now, &mut shell);

        (shell.is_event_captured(), shell.is_default_prevented())
    }

    fn press(&mut self, key: Named) -> (bool, bool) {
        self.update(Event::Keyboard(keyboard::Event::key_pressed(key)))
    }

    fn type_char(&mut self, character: char) -> (bool, bool) {
        let key: Key = Key::Character(character.to_string().into());

        self.update(Event::Keyboard(keyboard::Event::key_pressed(key)))
    }

    fn hover(&mut self, text: &str) {
        let bounds = self
            .menu
            .tree()
            .screen_bounds(self.key(text))
            .expect("bounds");

        let position = Point::new(
            bounds.x + bounds.width / 2.0,
            bounds.y + bounds.height / 2.0,
        );

        let _ = self.update(Event::Mouse(mouse::Event::CursorMoved { position }));
    }

    fn advance(&mut self, millis: u64) {
        self.now += Duration::from_millis(millis);

        let _ = self.update(Event::Window(window::Event::RedrawRequested(self.now)));
    }

    fn call(&mut self, f: impl FnOnce(&mut Menu<Message>, Instant, &mut Shell<'_, Message>)) {
        let mut shell = Shell::new(&mut self.messages);
        f(&mut self.menu, self.now, &mut shell);
    }

    fn focus(&mut self, text: &str) {
        let key = self.key(text);

        self.call(|menu, now, shell| {
            menu.focus(key, Origin::Keyboard, now, shell);
        });
    }

    fn active(&self) -> Option<&str> {
        self.menu
            .active()
            .and_then(|key| self.menu.tree().node(key))
            .map(Node::text)
    }

    fn take(&mut self) -> Vec<Message> {
        std::mem::take(&mut self.messages)
    }
}

#[test]
fn next_from_idle_focuses_first_item() {
    let mut harness = Harness::new(sample());
    let apple = harness.key("Apple");

    let (captured, prevented) = harness.press(Named::ArrowDown);

    assert!(captured);
    assert!(prevented);
    assert_eq!(harness.menu.active(), Some(apple));
    assert_eq!(harness.take(), vec![Message::Focused(apple)]);
}

#[test]
fn previous_from_idle_focuses_last_item() {
    let mut harness = Harness::new(sample());

    let _ = harness.press(Named::ArrowUp);

    assert_eq!(harness.active(), Some("Quit"));
}

#[test]
fn next_wraps_from_last_item() {
    let mut harness = Harness::new(sample());
    let apple = harness.key("Apple");

    harness.focus("Quit");
    let _ = harness.take();

    let _ = harness.press(Named::ArrowDown);

    assert_eq!(harness.menu.active(), Some(apple));
    assert_eq!(harness.take(), vec![Message::Focused(apple)]);
}

#[test]
fn previous_wraps_from_first_item() {
    let mut harness = Harness::new(sample());

    harness.focus("Apple");
    let _ = harness.press(Named::ArrowUp);

    assert_eq!(harness.active(), Some("Quit"));
}

#[test]
fn navigation_skips_text_and_disabled_entries() {
    let mut harness = Harness::new(sample());

    harness.focus("View");
    let _ = harness.press(Named::ArrowDown);

    assert_eq!(harness.active(), Some("Quit"));

    let _ = harness.press(Named::ArrowUp);

    assert_eq!(harness.active(), Some("View"));
}

#[test]
fn select_reports_the_active_item_after_closing() {
    let mut harness = Harness::new(sample());
    let apricot = harness.key("Apricot");

    harness.focus("Apricot");
    let _ = harness.take();

    let (captured, _) = harness.press(Named::Enter);

    assert!(captured);
    assert_eq!(harness.menu.active(), None);
    assert!(!harness.menu.is_open(harness.menu.tree().root()));
    assert_eq!(
        harness.take(),
        vec![Message::Blurred, Message::Selected(apricot)]
    );
}

#[test]
fn select_without_active_item_publishes_nothing() {
    let mut harness = Harness::new(sample());

    harness.call(|menu, _now, shell| menu.select(shell));

    assert!(harness.take().is_empty());
}

#[test]
fn right_then_left_returns_to_the_same_item() {
    let mut harness = Harness::new(sample());
    let edit = harness.key("Edit");
    let copy = harness.key("Copy");
    let submenu = harness.submenu("Edit");

    harness.focus("Edit");

    let (captured, prevented) = harness.press(Named::ArrowRight);

    assert!(captured);
    assert!(prevented);
    assert_eq!(harness.menu.active(), Some(copy));
    assert!(harness.menu.is_open(submenu));
    assert_eq!(harness.menu.active_menu(), submenu);

    let (captured, _) = harness.press(Named::ArrowLeft);

    assert!(captured);
    assert_eq!(harness.menu.active(), Some(edit));
    assert!(!harness.menu.is_open(submenu));
    assert_eq!(harness.menu.active_menu(), harness.menu.tree().root());
    assert_eq!(
        harness.take(),
        vec![
            Message::Focused(edit),
            Message::Focused(copy),
            Message::Focused(edit),
        ]
    );
}

#[test]
fn left_in_root_menu_is_not_captured() {
    let mut harness = Harness::new(sample());

    harness.focus("Apple");

    let (captured, prevented) = harness.press(Named::ArrowLeft);

    assert!(!captured);
    assert!(prevented);
    assert_eq!(harness.active(), Some("Apple"));
}

#[test]
fn right_without_submenu_is_not_captured() {
    let mut harness = Harness::new(sample());

    harness.focus("Apple");

    let (captured, prevented) = harness.press(Named::ArrowRight);

    assert!(!captured);
    assert!(prevented);
    assert!(harness.menu.open_submenus().is_empty());
}

#[test]
fn escape_leaves_the_submenu() {
    let mut harness = Harness::new(sample());
    let submenu = harness.submenu("Edit");

    harness.focus("Copy");

    assert!(harness.menu.is_open(submenu));

    let (captured, _) = harness.press(Named::Escape);

    assert!(captured);
    assert_eq!(harness.active(), Some("Edit"));
    assert!(!harness.menu.is_open(submenu));
}

#[test]
fn type_ahead_narrows_with_each_character() {
    let mut harness = Harness::new(sample());

    let (captured, _) = harness.type_char('a');

    assert!(captured);
    assert_eq!(harness.active(), Some("Apple"));
    assert_eq!(harness.menu.filter(), Some("a"));

    let _ = harness.type_char('P');

    assert_eq!(harness.active(), Some("Apple"));
    assert_eq!(harness.menu.filter(), Some("ap"));

    let _ = harness.type_char('r');

    assert_eq!(harness.active(), Some("Apricot"));
    assert_eq!(harness.menu.filter(), None);
}

#[test]
fn type_ahead_forgets_the_prefix_after_the_timeout() {
    let mut harness = Harness::new(sample());

    let _ = harness.type_char('a');
    let _ = harness.type_char('p');

    harness.advance(999);
    assert_eq!(harness.menu.filter(), Some("ap"));

    harness.advance(1);
    assert_eq!(harness.menu.filter(), None);

    let _ = harness.type_char('e');

    assert_eq!(harness.active(), Some("Edit"));
}

#[test]
fn repeating_a_character_cycles_through_matches() {
    let mut harness = Harness::new(sample());

    let _ = harness.type_char('a');
    assert_eq!(harness.active(), Some("Apple"));

    let _ = harness.type_char('a');
    assert_eq!(harness.active(), Some("Apricot"));

    let _ = harness.type_char('a');
    assert_eq!(harness.active(), Some("Apple"));
}

#[test]
fn type_ahead_retries_with_the_last_character() {
    let mut harness = Harness::new(sample());

    let _ = harness.type_char('a');
    let _ = harness.type_char('q');

    assert_eq!(harness.active(), Some("Quit"));
    assert_eq!(harness.menu.filter(), None);
}

#[test]
fn shortcuts_are_not_type_ahead() {
    let mut harness = Harness::new(sample());

    let (captured, _) = harness.update(Event::Keyboard(keyboard::Event::KeyPressed {
        key: Key::Character("a".into()),
        modifiers: Modifiers::CTRL,
        text: None,
    }));

    assert!(!captured);
    assert_eq!(harness.menu.active(), None);
}

#[test]
fn frozen_menu_ignores_input() {
    let mut harness = Harness::new(sample());

    harness.menu.freeze();
    assert!(harness.menu.is_inactive());

    let (captured, _) = harness.press(Named::ArrowDown);
    harness.hover("Apple");

    assert!(!captured);
    assert_eq!(harness.menu.active(), None);
    assert!(harness.take().is_empty());

    harness.menu.unfreeze();

    let _ = harness.press(Named::ArrowDown);

    assert_eq!(harness.active(), Some("Apple"));
}

#[test]
fn disabled_menu_ignores_input() {
    let mut harness = Harness::with_settings(
        sample(),
        Settings {
            disabled: true,
            ..Settings::default()
        },
    );

    let _ = harness.press(Named::ArrowDown);
    assert_eq!(harness.menu.active(), None);

    harness.menu.set_disabled(false);

    let _ = harness.press(Named::ArrowDown);
    assert_eq!(harness.active(), Some("Apple"));
}

#[test]
fn close_all_leaves_nothing_open() {
    let mut harness = Harness::new(sample());

    harness.focus("Upper");

    assert_eq!(harness.menu.open_submenus().len(), 2);

    harness.call(|menu, _now, shell| menu.close_all(shell));

    assert!(harness.menu.open_submenus().is_empty());
    assert!(!harness.menu.is_open(harness.menu.tree().root()));
    assert_eq!(harness.menu.active(), None);
    assert_eq!(harness.menu.active_descendant(), None);
    assert_eq!(harness.menu.active_menu(), harness.menu.tree().root());
    assert_eq!(harness.take().last(), Some(&Message::Blurred));

    let tree = harness.menu.tree();

    for key in tree.walk().into_iter().flat_map(|list| {
        tree.list(list)
            .map(|list| list.children().to_vec())
            .unwrap_or_default()
    }) {
        let node = tree.node(key).expect("node");

        assert!(!node.is_focused());
        assert!(!node.is_highlighted());
    }
}

#[test]
fn toggle_all_shows_and_hides_the_root_menu() {
    let mut harness = Harness::new(sample());
    let root = harness.menu.tree().root();

    harness.call(|menu, _now, shell| menu.toggle_all(shell));
    assert!(!harness.menu.is_open(root));

    harness.call(|menu, _now, shell| menu.toggle_all(shell));
    assert!(harness.menu.is_open(root));
    assert_eq!(harness.menu.active(), None);
}

#[test]
fn blur_is_deferred() {
    let mut harness = Harness::new(sample());

    harness.focus("Apple");
    harness.call(|menu, now, shell| menu.blur(now, shell));

    harness.advance(199);
    assert_eq!(harness.active(), Some("Apple"));

    harness.advance(1);
    assert_eq!(harness.menu.active(), None);
    assert_eq!(harness.menu.active_descendant(), None);
    assert_eq!(harness.take().last(), Some(&Message::Blurred));
}

#[test]
fn refocusing_drops_the_pending_blur() {
    let mut harness = Harness::new(sample());
    let apple = harness.key("Apple");
    let edit = harness.key("Edit");

    harness.focus("Apple");
    harness.call(|menu, now, shell| menu.blur(now, shell));
    harness.focus("Edit");

    harness.advance(500);

    assert_eq!(harness.menu.active(), Some(edit));
    assert_eq!(
        harness.take(),
        vec![Message::Focused(apple), Message::Focused(edit)]
    );
}

#[test]
fn hovering_opens_the_submenu_after_the_delay() {
    let mut harness = Harness::new(sample());
    let edit = harness.key("Edit");
    let copy = harness.key("Copy");
    let submenu = harness.submenu("Edit");

    harness.hover("Edit");

    assert_eq!(harness.menu.active(), Some(edit));
    assert!(!harness.menu.is_open(submenu));

    harness.advance(149);
    assert!(!harness.menu.is_open(submenu));

    harness.advance(1);
    assert!(harness.menu.is_open(submenu));
    assert_eq!(
        harness.menu.placement_of(submenu),
        Some(Point::new(WIDTH, ROW))
    );

    harness.hover("Copy");
    harness.advance(500);

    assert_eq!(harness.menu.active(), Some(copy));
    assert!(harness.menu.is_open(submenu));
    assert_eq!(
        harness.take(),
        vec![Message::Focused(edit), Message::Focused(copy)]
    );
}

#[test]
fn leaving_an_item_blurs_it() {
    let mut harness = Harness::new(sample());

    harness.hover("Apple");
    let _ = harness.update(Event::Mouse(mouse::Event::CursorLeft));
    harness.advance(200);

    assert_eq!(harness.menu.active(), None);
    assert_eq!(harness.take().last(), Some(&Message::Blurred));
}

#[test]
fn clicking_selects_the_item() {
    let mut harness = Harness::new(sample());
    let quit = harness.key("Quit");

    harness.hover("Quit");

    let (captured, prevented) =
        harness.update(Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)));

    assert!(captured);
    assert!(prevented);
    assert_eq!(
        harness.take(),
        vec![
            Message::Focused(quit),
            Message::Blurred,
            Message::Selected(quit),
        ]
    );
}

#[test]
fn clicking_outside_items_does_nothing() {
    let mut harness = Harness::new(sample());

    let _ = harness.update(Event::Mouse(mouse::Event::CursorMoved {
        position: Point::new(WIDTH * 3.0, ROW * 20.0),
    }));

    let (captured, _) =
        harness.update(Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)));

    assert!(!captured);
    assert!(harness.take().is_empty());
}

#[test]
fn active_descendant_follows_the_active_item() {
    let mut harness = Harness::new(sample());

    harness.focus("Apple");

    assert_eq!(
        harness.menu.active_descendant(),
        Some(&harness.menu.id().derive("activedescendant"))
    );

    harness.focus("Quit");

    assert_eq!(harness.menu.active_descendant(), Some(&Id::from("quit")));
}

#[test]
fn settings_id_names_the_menu() {
    let harness = Harness::with_settings(
        sample(),
        Settings {
            id: Some(String::from("main")),
            ..Settings::default()
        },
    );

    assert_eq!(harness.menu.id().to_string(), "main");
}

#[test]
fn pages_jump_to_the_edges_without_scrolling() {
    let mut harness = Harness::new(sample());

    let _ = harness.press(Named::PageDown);
    assert_eq!(harness.active(), Some("Apple"));

    let _ = harness.press(Named::PageDown);
    assert_eq!(harness.active(), Some("Quit"));

    let _ = harness.press(Named::PageDown);
    assert_eq!(harness.active(), Some("Apple"));

    let _ = harness.press(Named::PageUp);
    assert_eq!(harness.active(), Some("Quit"));

    let _ = harness.press(Named::PageUp);
    assert_eq!(harness.active(), Some("Apple"));
}

#[test]
fn pages_move_by_the_viewport_height_when_scrolling() {
    let entries = (0..10).map(|i| Entry::item(format!("Item {i}"))).collect();
    let mut harness = Harness::new(entries);
    let root = harness.menu.tree().root();

    harness.menu.set_viewport(
        root,
        Rectangle::new(Point::ORIGIN, Size::new(WIDTH, ROW * 3.0)),
    );

    harness.focus("Item 0");

    let _ = harness.press(Named::PageDown);
    assert_eq!(harness.active(), Some("Item 3"));
    assert_eq!(
        harness.menu.tree().list(root).map(List::scroll_offset),
        Some(ROW)
    );

    let _ = harness.press(Named::PageUp);
    assert_eq!(harness.active(), Some("Item 0"));
    assert_eq!(
        harness.menu.tree().list(root).map(List::scroll_offset),
        Some(0.0)
    );

    let _ = harness.press(Named::PageUp);
    assert_eq!(harness.active(), Some("Item 9"));
}

#[test]
fn opening_a_submenu_hides_unrelated_ones() {
    let mut harness = Harness::new(sample());
    let view = harness.submenu("View");
    let zoom = harness.key("Zoom");

    harness.focus("Upper");
    let _ = harness.take();

    harness.call(|menu, _now, shell| menu.open_submenu(view, shell));

    assert_eq!(harness.menu.open_submenus(), vec![view]);
    assert_eq!(harness.menu.active(), None);
    assert_eq!(harness.take(), vec![Message::Blurred]);
    assert!(
        harness
            .menu
            .tree()
            .node(zoom)
            .is_some_and(Node::is_highlighted)
    );
}

#[test]
fn close_submenu_keeps_the_active_item() {
    let mut harness = Harness::new(sample());
    let edit = harness.submenu("Edit");
    let transform = harness.submenu("Transform");

    harness.focus("Copy");
    harness.call(|menu, _now, shell| menu.open_submenu(transform, shell));

    assert_eq!(harness.menu.open_submenus(), vec![edit, transform]);

    harness.call(|menu, _now, shell| menu.close_submenu(shell));

    assert_eq!(harness.menu.open_submenus(), vec![edit]);
    assert_eq!(harness.active(), Some("Copy"));
}

#[test]
fn focus_requests_a_redraw_at_the_next_deadline() {
    let mut harness = Harness::new(sample());
    let apple = harness.key("Apple");
    let mut messages = Vec::new();
    let mut shell = Shell::new(&mut messages);

    harness
        .menu
        .focus(apple, Origin::Keyboard, harness.now, &mut shell);

    assert_eq!(
        shell.redraw_request(),
        window::RedrawRequest::At(harness.now + Duration::from_millis(150))
    );
}

#[test]
fn removing_the_active_item_clears_it() {
    let mut harness = Harness::new(sample());
    let edit = harness.key("Edit");

    harness.focus("Copy");

    assert!(harness.menu.remove(edit));
    assert_eq!(harness.menu.active(), None);
    assert_eq!(harness.menu.active_menu(), harness.menu.tree().root());
    assert!(harness.menu.tree().find("Copy").is_none());
}

#[test]
fn refresh_adapts_new_items() {
    let mut harness = Harness::new(sample());
    let root = harness.menu.tree().root();

    let zebra = harness.menu.push(root, Entry::item("Zebra")).expect("zebra");

    let _ = harness.press(Named::ArrowUp);
    assert_eq!(harness.active(), Some("Quit"));

    harness.menu.refresh();

    let _ = harness.press(Named::ArrowDown);
    assert_eq!(harness.menu.active(), Some(zebra));
}

#[test]
fn refresh_hides_new_submenus() {
    let mut harness = Harness::new(sample());
    let root = harness.menu.tree().root();

    let more = harness
        .menu
        .push(root, Entry::with_children("More", vec![Entry::item("Help")]))
        .and_then(|key| harness.menu.tree().node(key)?.submenu())
        .expect("submenu");

    harness.menu.refresh();

    assert!(!harness.menu.is_open(more));
}

#[test]
fn item_selector_picks_the_items() {
    let mut harness = Harness::with_settings(
        sample(),
        Settings {
            item_selector: String::from("span"),
            ..Settings::default()
        },
    );

    let _ = harness.press(Named::ArrowDown);
    assert_eq!(harness.active(), Some("Heading"));

    let _ = harness.press(Named::ArrowDown);
    assert_eq!(harness.active(), Some("Heading"));
}

#[test]
fn destroy_restores_the_tree() {
    let mut harness = Harness::new(sample());

    harness.focus("Upper");

    let tree = harness.menu.destroy();

    for list in tree.walk() {
        let list = tree.list(list).expect("list");

        assert_eq!(list.scroll_offset(), 0.0);

        for key in list.children() {
            let node = tree.node(*key).expect("node");

            assert!(!node.is_item());
            assert!(!node.is_focused());
            assert!(!node.is_highlighted());
        }
    }
}

#[test]
fn type_ahead_restarts_after_the_timeout() {
    let mut harness = Harness::new(sample());

    let _ = harness.type_char('a');
    assert_eq!(harness.active(), Some("Apple"));

    harness.advance(1000);

    let _ = harness.type_char('a');
    assert_eq!(harness.active(), Some("Apple"));
    assert_eq!(harness.menu.filter(), Some("a"));
}

#[test]
fn type_ahead_restarts_after_the_timeout_without_redraw() {
    let mut harness = Harness::new(sample());

    let _ = harness.type_char('a');
    assert_eq!(harness.active(), Some("Apple"));

    harness.now += Duration::from_millis(1500);

    let _ = harness.type_char('a');
    assert_eq!(harness.active(), Some("Apple"));
    assert_eq!(harness.menu.filter(), Some("a"));
}

#[test]
fn due_blur_fires_before_the_next_event() {
    let mut harness = Harness::new(sample());
    let apple = harness.key("Apple");

    harness.focus("Apricot");
    harness.call(|menu, now, shell| menu.blur(now, shell));
    let _ = harness.take();

    harness.now += Duration::from_millis(300);

    let _ = harness.press(Named::ArrowDown);

    assert_eq!(harness.menu.active(), Some(apple));
    assert_eq!(
        harness.take(),
        vec![Message::Blurred, Message::Focused(apple)]
    );
}

#[test]
fn due_blur_fires_before_a_direct_focus() {
    let mut harness = Harness::new(sample());
    let edit = harness.key("Edit");

    harness.focus("Apple");
    harness.call(|menu, now, shell| menu.blur(now, shell));
    let _ = harness.take();

    harness.now += Duration::from_millis(200);
    harness.focus("Edit");

    assert_eq!(
        harness.take(),
        vec![Message::Blurred, Message::Focused(edit)]
    );
}

#[test]
fn left_closes_nested_submenus() {
    let mut harness = Harness::new(sample());
    let edit = harness.submenu("Edit");
    let transform = harness.submenu("Transform");

    harness.focus("Edit");
    let _ = harness.press(Named::ArrowRight);

    harness.hover("Transform");
    harness.advance(150);

    assert!(harness.menu.is_open(transform));

    let (captured, _) = harness.press(Named::ArrowLeft);

    assert!(captured);
    assert_eq!(harness.active(), Some("Edit"));
    assert!(!harness.menu.is_open(edit));
    assert!(!harness.menu.is_open(transform));
    assert!(harness.menu.open_submenus().is_empty());
    assert_eq!(harness.menu.active_menu(), harness.menu.tree().root());
}

#[test]
fn focusing_another_branch_closes_the_previous_one() {
    let mut harness = Harness::new(sample());
    let edit = harness.submenu("Edit");
    let view = harness.submenu("View");
    let zoom = harness.key("Zoom");

    harness.focus("Copy");
    assert!(harness.menu.is_open(edit));
    let _ = harness.take();

    harness.focus("Zoom");

    assert_eq!(harness.menu.open_submenus(), vec![view]);
    assert_eq!(harness.take(), vec![Message::Focused(zoom)]);
}

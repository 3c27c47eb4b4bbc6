//! Whole-view scenarios, driven through the headless platform.
use demo::{
    DemoConfig, INCREMENT_ID, RANDOMIZE_ID, RootView, Strategy,
    counter::CounterViewModel,
    random_number::{CounterHost, RANGE},
};
use hoist::{context::Context, ssr::Ssr, view::ViewText};

fn root(strategy: Strategy) -> RootView<Ssr> {
    let config = DemoConfig {
        strategy,
        seed: Some(42),
    };
    RootView::<Ssr>::new(&config, &Context::new()).unwrap()
}

#[test]
fn initial_render() {
    let root = root(Strategy::Wrapped);
    let html = root.html_string();
    assert!(html.starts_with(
        r#"<main style="padding: 1em; text-align: center;"><h1>Scoped State Alternatives</h1>"#
    ));
    assert!(html.contains("<h2>Random number is: 0</h2>"), "{html}");
    assert!(html.contains("<h2>Count is: 0</h2>"), "{html}");
    assert_eq!(Some(0), root.count());
    assert_eq!(0, root.random_number().value());
}

#[test]
fn counter_increments_by_one() {
    for strategy in [Strategy::Wrapped, Strategy::Value] {
        let root = root(strategy);
        assert!(root.click(INCREMENT_ID));
        assert_eq!(Some(1), root.count(), "{strategy}");
        assert!(root.click(INCREMENT_ID));
        assert_eq!(Some(2), root.count(), "{strategy}");
        assert!(root.html_string().contains("<h2>Count is: 2</h2>"));
        // the random number is a separate piece of state
        assert_eq!(0, root.random_number().value());
    }
}

#[test]
fn randomize_stays_in_range() {
    let root = root(Strategy::Value);
    for _ in 0..1000 {
        assert!(root.click(RANDOMIZE_ID));
        let n = root.random_number().value();
        assert!(RANGE.contains(&n), "{n} is out of range");
    }
    let label = format!("<h2>Random number is: {}</h2>", root.random_number().value());
    assert!(root.html_string().contains(&label));
    assert_eq!(Some(0), root.count());
}

#[test]
fn seeded_runs_repeat() {
    let (a, b) = (root(Strategy::Wrapped), root(Strategy::Wrapped));
    for _ in 0..10 {
        a.click(RANDOMIZE_ID);
        b.click(RANDOMIZE_ID);
        assert_eq!(a.random_number(), b.random_number());
    }
}

#[test]
fn wrapped_model_is_shared_with_its_view() {
    let root = root(Strategy::Wrapped);
    let CounterHost::Wrapped { wrapper, view } = &root.random_number.counter else {
        panic!("expected the wrapped strategy");
    };
    assert!(wrapper.model().ptr_eq(view.model()));

    // a mutation from the owning side shows up in the descendant
    wrapper.model().increment_counter();
    assert_eq!("Count is: 1", view.count_text.get_text());

    // and one from the descendant's button shows up in the owner
    root.click(INCREMENT_ID);
    assert_eq!(2, wrapper.model().count());
}

#[test]
fn outer_model_does_not_leak_into_wrapped_counter() {
    let cx = Context::new();
    let outer = CounterViewModel::new();
    let _guard = cx.provide(outer.clone());
    let root = RootView::<Ssr>::new(&DemoConfig::default(), &cx).unwrap();
    root.click(INCREMENT_ID);
    assert_eq!(Some(1), root.count());
    assert_eq!(0, outer.count());
    assert_eq!(1, cx.depth());
}

#[test]
fn missing_ids_are_not_clickable() {
    assert!(!root(Strategy::Wrapped).click("nope"));
}

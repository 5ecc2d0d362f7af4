//! Integration tests for values that are not yet known when `mergo` runs.
//!
//! An unknown entry must stay unknown in the result wherever it meets another
//! value, while every known entry keeps merging normally.

use anyhow::{Result, anyhow, ensure};
use deepmerge::host::{HostType, HostValue};
use deepmerge::{ArgumentError, Function, FunctionError, MergoFunction};
use rstest::{fixture, rstest};
use test_helpers::host::{object_with_unknown, unknown};

#[fixture]
fn mergo() -> MergoFunction {
    MergoFunction::default()
}

fn object(entries: &[(&str, HostValue)]) -> HostValue {
    HostValue::object(entries.iter().cloned())
}

fn attribute<'a>(result: &'a HostValue, name: &str) -> Result<&'a HostValue> {
    let HostValue::Object(attributes) = result.underlying() else {
        return Err(anyhow!("expected an object result, got {result:?}"));
    };
    attributes
        .get(name)
        .ok_or_else(|| anyhow!("missing attribute {name} in {result:?}"))
}

#[rstest]
fn unknown_entries_survive_alongside_known_ones(mergo: MergoFunction) -> Result<()> {
    let result = mergo.run(&[
        object(&[("a", HostValue::string("known"))]),
        object_with_unknown("b", HostType::String),
    ])?;
    ensure!(attribute(&result, "a")? == &HostValue::string("known"));
    ensure!(attribute(&result, "b")? == &unknown(HostType::String));
    Ok(())
}

#[rstest]
#[case::incoming_unknown_wins(
    object(&[("a", HostValue::string("foo"))]),
    object_with_unknown("a", HostType::String),
    None,
)]
#[case::incoming_unknown_beats_no_override(
    object(&[("a", HostValue::string("foo"))]),
    object_with_unknown("a", HostType::String),
    Some("no_override"),
)]
#[case::existing_unknown_is_sticky(
    object_with_unknown("a", HostType::String),
    object(&[("a", HostValue::string("foo"))]),
    None,
)]
#[case::existing_unknown_ignores_null(
    object_with_unknown("a", HostType::String),
    object(&[("a", HostValue::dynamic_null())]),
    None,
)]
fn conflicts_with_unknowns_stay_unknown(
    mergo: MergoFunction,
    #[case] first: HostValue,
    #[case] second: HostValue,
    #[case] directive: Option<&str>,
) -> Result<()> {
    let mut arguments = vec![first, second];
    arguments.extend(directive.map(HostValue::string));
    let result = mergo.run(&arguments)?;
    ensure!(
        attribute(&result, "a")? == &unknown(HostType::String),
        "expected unknown attribute in {result:?}"
    );
    Ok(())
}

#[rstest]
fn unknown_lists_are_not_appended(mergo: MergoFunction) -> Result<()> {
    let list = HostValue::Tuple(vec![HostValue::from(1)]);
    let unknown_list = unknown(HostType::List(Box::new(HostType::Number)));
    let result = mergo.run(&[
        object(&[("l", list)]),
        object(&[("l", unknown_list.clone())]),
        HostValue::string("append"),
    ])?;
    ensure!(attribute(&result, "l")? == &unknown_list);
    Ok(())
}

#[rstest]
fn nested_unknowns_keep_known_siblings(mergo: MergoFunction) -> Result<()> {
    let result = mergo.run(&[
        object(&[("nested", object(&[("a", HostValue::string("known"))]))]),
        object(&[("nested", object_with_unknown("b", HostType::String))]),
    ])?;
    let nested = attribute(&result, "nested")?;
    ensure!(attribute(nested, "a")? == &HostValue::string("known"));
    ensure!(attribute(nested, "b")? == &unknown(HostType::String));
    Ok(())
}

#[rstest]
fn unknowns_coexist_with_null_handling(mergo: MergoFunction) -> Result<()> {
    let result = mergo.run(&[
        object(&[
            ("a", HostValue::string("keep_this")),
            ("b", unknown(HostType::String)),
        ]),
        object(&[
            ("a", HostValue::dynamic_null()),
            ("c", HostValue::string("added")),
        ]),
        HostValue::string("no_null_override"),
    ])?;
    ensure!(attribute(&result, "a")? == &HostValue::string("keep_this"));
    ensure!(attribute(&result, "b")? == &unknown(HostType::String));
    ensure!(attribute(&result, "c")? == &HostValue::string("added"));
    Ok(())
}

#[rstest]
fn unknowns_from_several_arguments_are_all_kept(mergo: MergoFunction) -> Result<()> {
    let result = mergo.run(&[
        object(&[
            ("a", unknown(HostType::String)),
            ("b", HostValue::string("known1")),
        ]),
        object(&[
            ("c", unknown(HostType::Number)),
            ("d", HostValue::string("known2")),
        ]),
    ])?;
    ensure!(attribute(&result, "a")? == &unknown(HostType::String));
    ensure!(attribute(&result, "b")? == &HostValue::string("known1"));
    ensure!(attribute(&result, "c")? == &unknown(HostType::Number));
    ensure!(attribute(&result, "d")? == &HostValue::string("known2"));
    Ok(())
}

#[rstest]
#[case::unknown_map(unknown(HostType::Map(Box::new(HostType::String))))]
#[case::unknown_directive(unknown(HostType::String))]
#[case::wrapped(HostValue::dynamic(HostValue::dynamic_unknown()))]
fn wholly_unknown_arguments_defer_the_merge(
    mergo: MergoFunction,
    #[case] pending: HostValue,
) -> Result<()> {
    let result = mergo.run(&[object(&[("a", HostValue::from(1))]), pending])?;
    ensure!(
        result == HostValue::dynamic_unknown(),
        "expected a dynamic unknown, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[case::bogus_directive(HostValue::string("bogus"))]
#[case::unsupported_kind(HostValue::from(5))]
fn arguments_after_an_unknown_cannot_fail_the_call(
    mergo: MergoFunction,
    #[case] later: HostValue,
) -> Result<()> {
    let result = mergo.run(&[HostValue::dynamic_unknown(), object(&[]), later])?;
    ensure!(
        result == HostValue::dynamic_unknown(),
        "expected the call to defer, got {result:?}"
    );
    Ok(())
}

#[rstest]
fn invalid_arguments_before_an_unknown_are_reported(mergo: MergoFunction) -> Result<()> {
    let err = mergo
        .run(&[
            object(&[]),
            HostValue::string("bogus"),
            HostValue::dynamic_unknown(),
        ])
        .err()
        .ok_or_else(|| anyhow!("expected bogus directive to be rejected"))?;
    ensure!(
        err == FunctionError::argument(1, ArgumentError::unrecognised("bogus")),
        "unexpected error: {err}"
    );
    Ok(())
}

//! Algebraic properties of the merge engine over realistic layered documents.

use anyhow::{Result, ensure};
use deepmerge::json::from_json;
use deepmerge::{Directive, DynamicValue, MergeOptions, merge, merge_two};
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn layers() -> Result<[DynamicValue; 3]> {
    Ok([
        from_json(&json!({
            "service": {"name": "api", "replicas": 2, "ports": [80]},
            "labels": {"team": "core"},
            "features": ["auth"],
        }))?,
        from_json(&json!({
            "service": {"replicas": 3, "ports": [443], "image": null},
            "labels": {"tier": "backend"},
            "features": ["auth", "metrics"],
        }))?,
        from_json(&json!({
            "service": {"image": "api:1.2", "ports": [80, 8080]},
            "labels": {"team": "platform"},
            "features": ["tracing"],
        }))?,
    ])
}

#[rstest]
#[case::override_existing(MergeOptions::default())]
#[case::no_override(MergeOptions::from_directives([Directive::NoOverride]))]
#[case::no_null_override(MergeOptions::from_directives([Directive::NoNullOverride]))]
#[case::append(MergeOptions::from_directives([Directive::AppendLists]))]
#[case::union(MergeOptions::from_directives([Directive::UnionLists]))]
fn folding_is_associative(
    layers: Result<[DynamicValue; 3]>,
    #[case] options: MergeOptions,
) -> Result<()> {
    let [first, second, third] = layers?;
    let folded = merge(&[first.clone(), second.clone(), third.clone()], options);
    let left = merge_two(merge_two(first.clone(), &second, options), &third, options);
    let right = merge_two(first, &merge_two(second, &third, options), options);
    ensure!(folded == left, "{folded:?} != {left:?}");
    ensure!(folded == right, "{folded:?} != {right:?}");
    Ok(())
}

#[rstest]
#[case::override_existing(MergeOptions::default())]
#[case::no_override(MergeOptions::from_directives([Directive::NoOverride]))]
#[case::no_null_override(MergeOptions::from_directives([Directive::NoNullOverride]))]
fn merging_with_itself_is_idempotent(
    layers: Result<[DynamicValue; 3]>,
    #[case] options: MergeOptions,
) -> Result<()> {
    let [first, _, _] = layers?;
    let merged = merge(&[first.clone(), first.clone()], options);
    ensure!(merged == first, "self-merge changed the document: {merged:?}");
    Ok(())
}

#[rstest]
fn appending_to_itself_duplicates_lists(layers: Result<[DynamicValue; 3]>) -> Result<()> {
    let [first, _, _] = layers?;
    let merged = merge(
        &[first.clone(), first],
        MergeOptions::from_directives([Directive::AppendLists]),
    );
    ensure!(
        merged.get("features") == Some(&from_json(&json!(["auth", "auth"]))?),
        "append must keep both copies: {merged:?}"
    );
    Ok(())
}

#[rstest]
fn union_collapses_repeats_already_present() -> Result<()> {
    let repeated = from_json(&json!({"ids": [1, 1, 2]}))?;
    let merged = merge(
        &[repeated.clone(), repeated.clone()],
        MergeOptions::from_directives([Directive::UnionLists]),
    );
    ensure!(merged != repeated, "union must not be idempotent here");
    ensure!(merged == from_json(&json!({"ids": [1, 2]}))?);
    Ok(())
}

#[rstest]
fn empty_mapping_is_an_identity(layers: Result<[DynamicValue; 3]>) -> Result<()> {
    let [first, _, _] = layers?;
    let options = MergeOptions::default();
    let empty = DynamicValue::empty_mapping();
    ensure!(merge(&[empty.clone(), first.clone()], options) == first);
    ensure!(merge(&[first.clone(), empty], options) == first);
    Ok(())
}

#[rstest]
fn layered_merge_matches_expected_document(layers: Result<[DynamicValue; 3]>) -> Result<()> {
    let merged = merge(
        &layers?,
        MergeOptions::from_directives([Directive::NoNullOverride, Directive::UnionLists]),
    );
    let expected = from_json(&json!({
        "service": {
            "name": "api",
            "replicas": 3,
            "ports": [80, 443, 8080],
            "image": "api:1.2",
        },
        "labels": {"team": "platform", "tier": "backend"},
        "features": ["auth", "metrics", "tracing"],
    }))?;
    ensure!(merged == expected, "unexpected merge result: {merged:?}");
    Ok(())
}

#[rstest]
fn inputs_are_left_untouched(layers: Result<[DynamicValue; 3]>) -> Result<()> {
    let inputs = layers?;
    let snapshot = inputs.clone();
    let _merged = merge(&inputs, MergeOptions::from_directives([Directive::AppendLists]));
    ensure!(inputs == snapshot);
    Ok(())
}

//! Property-based tests: every command lands in exactly one group, group
//! keys come out sorted and unique, input order survives within a group,
//! and rendering is deterministic.

use console_summary::{
    group_by_namespace, ApplicationDescriptor, CommandDescriptor, PlainSink, SummaryRenderer,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn commands_strategy() -> impl Strategy<Value = Vec<CommandDescriptor>> {
    prop::collection::vec(("[a-z:]{0,8}", ".{0,12}"), 0..16).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(name, description)| CommandDescriptor::new(name, description))
            .collect()
    })
}

#[test]
fn test_every_command_in_exactly_one_group() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&commands_strategy(), |commands| {
            let groups = group_by_namespace(&commands);
            let grouped: usize = groups.iter().map(|(_, members)| members.len()).sum();
            assert_eq!(grouped, commands.len());

            let distinct: BTreeSet<&str> =
                commands.iter().map(|command| command.namespace()).collect();
            assert_eq!(groups.len(), distinct.len());
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_group_keys_strictly_ascending() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&commands_strategy(), |commands| {
            let groups = group_by_namespace(&commands);
            for pair in groups.windows(2) {
                assert!(pair[0].0 < pair[1].0);
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_input_order_preserved_within_groups() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&commands_strategy(), |commands| {
            let groups = group_by_namespace(&commands);
            for (key, members) in &groups {
                let expected: Vec<&CommandDescriptor> = commands
                    .iter()
                    .filter(|command| command.namespace() == *key)
                    .collect();
                assert_eq!(*members, expected);
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_render_deterministic_for_any_descriptor() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(".{0,10}", ".{0,10}", commands_strategy()),
            |(name, version, commands)| {
                let app = ApplicationDescriptor::new(name, version).with_commands(commands);
                let renderer = SummaryRenderer::new("demo");

                let mut first = PlainSink::new(Vec::new());
                renderer.render(&app, &mut first).unwrap();
                let mut second = PlainSink::new(Vec::new());
                renderer.render(&app, &mut second).unwrap();

                assert_eq!(first.into_inner(), second.into_inner());
                Ok(())
            },
        )
        .unwrap();
}

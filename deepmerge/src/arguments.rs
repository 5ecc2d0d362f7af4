//! Separation of `mergo` arguments into data maps and directives.

use tracing::debug;

use crate::codec::decode;
use crate::host::HostValue;
use crate::options::{Directive, MergeOptions};
use crate::result_ext::AtPosition;
use crate::value::DynamicValue;
use crate::{ArgumentError, FunctionError};

/// Outcome of scanning a call's arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Partition {
    /// Every argument is known.
    Known {
        /// Decoded data maps in argument order.
        maps: Vec<DynamicValue>,
        /// Options after applying every directive in order.
        options: MergeOptions,
    },
    /// At least one argument is wholly unknown, so the merge cannot run yet.
    Unknown,
}

enum Classified {
    Skip,
    Unknown,
    Directive(Directive),
    Data(DynamicValue),
}

/// Split `arguments` into data maps and merge options.
///
/// Directives are applied on top of `defaults` in argument order. Null
/// arguments contribute nothing. The first wholly unknown argument ends the
/// scan: no directive after it can be trusted, so the merge is deferred.
///
/// # Errors
///
/// Returns [`FunctionError::Argument`] with the 0-based position of the first
/// argument that is an unsupported kind, an unrecognised directive, or a map
/// that fails to decode.
pub fn partition(
    arguments: &[HostValue],
    defaults: MergeOptions,
) -> Result<Partition, FunctionError> {
    let mut maps = Vec::with_capacity(arguments.len());
    let mut options = defaults;

    for (position, argument) in arguments.iter().enumerate() {
        match classify(argument).at(position)? {
            Classified::Skip => {}
            Classified::Unknown => {
                debug!(position, "argument is unknown; deferring merge");
                return Ok(Partition::Unknown);
            }
            Classified::Directive(directive) => options = options.apply(directive),
            Classified::Data(value) => maps.push(value),
        }
    }

    Ok(Partition::Known { maps, options })
}

fn classify(argument: &HostValue) -> Result<Classified, ArgumentError> {
    match argument {
        HostValue::Dynamic(inner) => classify(inner),
        HostValue::Null(_) => Ok(Classified::Skip),
        HostValue::Unknown(_) => Ok(Classified::Unknown),
        HostValue::String(option) => option.parse().map(Classified::Directive),
        HostValue::Map { .. } | HostValue::Object(_) => Ok(Classified::Data(decode(argument)?)),
        HostValue::Number(_)
        | HostValue::Bool(_)
        | HostValue::List { .. }
        | HostValue::Set { .. }
        | HostValue::Tuple(_)
        | HostValue::Capsule { .. } => Err(ArgumentError::unsupported(argument.kind())),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{Partition, partition};
    use crate::host::{HostType, HostValue};
    use crate::options::MergeOptions;
    use crate::value::DynamicValue;
    use crate::{ArgumentError, FunctionError};

    fn map_argument(key: &str, value: i64) -> HostValue {
        HostValue::dynamic(HostValue::object([(key, HostValue::from(value))]))
    }

    #[test]
    fn separates_maps_from_directives() {
        let arguments = [
            map_argument("a", 1),
            HostValue::dynamic(HostValue::string("no_override")),
            map_argument("b", 2),
            HostValue::dynamic(HostValue::string("append")),
        ];

        let Ok(Partition::Known { maps, options }) = partition(&arguments, MergeOptions::default())
        else {
            panic!("arguments are known");
        };
        assert_eq!(
            maps,
            vec![
                DynamicValue::mapping([("a", 1.into())]),
                DynamicValue::mapping([("b", 2.into())]),
            ]
        );
        assert!(!options.override_existing);
        assert!(options.append_lists);
    }

    #[test]
    fn skips_null_arguments() {
        let arguments = [
            HostValue::dynamic_null(),
            map_argument("a", 1),
            HostValue::dynamic(HostValue::Null(HostType::String)),
        ];
        let outcome = partition(&arguments, MergeOptions::default());
        assert_eq!(
            outcome,
            Ok(Partition::Known {
                maps: vec![DynamicValue::mapping([("a", 1.into())])],
                options: MergeOptions::default(),
            })
        );
    }

    #[test]
    fn accepts_maps_as_well_as_objects() {
        let argument = HostValue::Map {
            element_type: HostType::String,
            elements: [("k".to_owned(), HostValue::string("v"))].into(),
        };
        let Ok(Partition::Known { maps, .. }) = partition(&[argument], MergeOptions::default())
        else {
            panic!("map argument is known");
        };
        assert_eq!(maps, vec![DynamicValue::mapping([("k", "v".into())])]);
    }

    #[rstest]
    #[case(HostValue::from(true), "bool")]
    #[case(HostValue::from(3), "number")]
    #[case(HostValue::Tuple(vec![HostValue::from(1)]), "tuple")]
    #[case(
        HostValue::List { element_type: HostType::Number, elements: Vec::new() },
        "list"
    )]
    #[case(
        HostValue::Set { element_type: HostType::Number, elements: Vec::new() },
        "set"
    )]
    fn rejects_unsupported_kinds_with_position(#[case] argument: HostValue, #[case] kind: &str) {
        let arguments = [map_argument("a", 1), HostValue::dynamic(argument)];
        assert_eq!(
            partition(&arguments, MergeOptions::default()),
            Err(FunctionError::argument(1, ArgumentError::unsupported(kind)))
        );
    }

    #[test]
    fn rejects_unrecognised_directive_with_position() {
        let arguments = [
            map_argument("a", 1),
            HostValue::dynamic_null(),
            HostValue::string("bogus"),
        ];
        let err = partition(&arguments, MergeOptions::default()).expect_err("bogus directive");
        assert_eq!(err.position(), Some(2));
        assert_eq!(err.to_string(), "argument 2: unrecognised option");
    }

    #[test]
    fn reports_decode_failures_at_the_argument() {
        let arguments = [HostValue::object([(
            "handle",
            HostValue::Capsule {
                type_name: "socket".to_owned(),
            },
        )])];
        let err = partition(&arguments, MergeOptions::default()).expect_err("capsule rejected");
        assert!(matches!(
            err,
            FunctionError::Argument {
                position: 0,
                source: ArgumentError::Decode(_)
            }
        ));
    }

    #[test]
    fn unknown_argument_defers_the_merge() {
        let arguments = [
            map_argument("a", 1),
            HostValue::dynamic(HostValue::dynamic_unknown()),
            HostValue::string("append"),
        ];
        assert_eq!(
            partition(&arguments, MergeOptions::default()),
            Ok(Partition::Unknown)
        );
    }

    #[test]
    fn arguments_after_an_unknown_are_not_inspected() {
        let arguments = [
            HostValue::Unknown(HostType::String),
            HostValue::string("bogus"),
            HostValue::from(3),
        ];
        assert_eq!(
            partition(&arguments, MergeOptions::default()),
            Ok(Partition::Unknown)
        );
    }

    #[test]
    fn errors_before_an_unknown_are_reported() {
        let arguments = [HostValue::string("bogus"), HostValue::dynamic_unknown()];
        let err = partition(&arguments, MergeOptions::default()).expect_err("bogus directive");
        assert_eq!(err.position(), Some(0));
    }

    #[test]
    fn nested_unknowns_do_not_defer() {
        let arguments = [HostValue::object([("a", HostValue::Unknown(HostType::String))])];
        assert!(matches!(
            partition(&arguments, MergeOptions::default()),
            Ok(Partition::Known { .. })
        ));
    }
}

//! Parses sequences written as comma-separated lists, such as `1, 2, 3` or `[a,b,c]`.
use chumsky::prelude::*;
use thiserror::Error;

type Extra<'a> = extra::Err<Rich<'a, char>>;

///Unable to parse a sequence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Could not parse sequence: {0}")]
pub struct SequenceParseError(String);

impl From<Vec<Rich<'_, char>>> for SequenceParseError {
    fn from(value: Vec<Rich<'_, char>>) -> Self {
        SequenceParseError(
            value
                .iter()
                .map(std::string::ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

fn sequence_of<'a, O>(
    item: impl Parser<'a, &'a str, O, Extra<'a>> + Clone,
) -> impl Parser<'a, &'a str, Vec<O>, Extra<'a>> {
    let items = item
        .padded()
        .separated_by(just(',').padded())
        .allow_trailing()
        .at_least(1)
        .collect::<Vec<_>>();

    items
        .clone()
        .delimited_by(just('['), just(']'))
        .or(items)
        .padded()
        .then_ignore(end())
}

fn value<'a>() -> impl Parser<'a, &'a str, i64, Extra<'a>> + Clone {
    just('-')
        .or_not()
        .then(text::int::<&'a str, Extra<'a>>(10))
        .to_slice()
        .try_map(|s: &str, span| s.parse::<i64>().map_err(|e| Rich::custom(span, e)))
}

fn label<'a>() -> impl Parser<'a, &'a str, String, Extra<'a>> + Clone {
    none_of(",[] \t\r\n")
        .repeated()
        .at_least(1)
        .to_slice()
        .map(|s: &str| s.to_string())
}

///Parse a list of signed integers.
///
///```
///# use exhaustive_enum::parser::parse_values;
///assert_eq!(parse_values("[1, -2, 3,]")?, vec![1, -2, 3]);
///# Ok::<(), anyhow::Error>(())
///```
///
///# Errors
///Returns a [`SequenceParseError`] if the string is not a non-empty list of integers that fit
///in an `i64`.
pub fn parse_values(s: &str) -> Result<Vec<i64>, SequenceParseError> {
    sequence_of(value())
        .parse(s)
        .into_result()
        .map_err(std::convert::Into::into)
}

///Parse a list of labels; anything but commas, brackets and whitespace.
///
///# Errors
///Returns a [`SequenceParseError`] if the string is not a non-empty list.
pub fn parse_labels(s: &str) -> Result<Vec<String>, SequenceParseError> {
    sequence_of(label())
        .parse(s)
        .into_result()
        .map_err(std::convert::Into::into)
}

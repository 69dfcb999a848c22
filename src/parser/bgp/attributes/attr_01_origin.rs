use bytes::Bytes;

use crate::error::ParserError;
use crate::parser::ReadUtils;

/// Parse the ORIGIN attribute into its canonical lowercase rendering.
pub(crate) fn parse_origin(mut input: Bytes) -> Result<&'static str, ParserError> {
    match input.read_u8()? {
        0 => Ok("igp"),
        1 => Ok("egp"),
        2 => Ok("incomplete"),
        unknown => Err(ParserError::ParseError(format!(
            "unknown ORIGIN value {unknown}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origin() {
        assert_eq!(parse_origin(Bytes::from_static(&[0])).unwrap(), "igp");
        assert_eq!(parse_origin(Bytes::from_static(&[1])).unwrap(), "egp");
        assert_eq!(
            parse_origin(Bytes::from_static(&[2])).unwrap(),
            "incomplete"
        );
        assert!(parse_origin(Bytes::from_static(&[3])).is_err());
        assert!(parse_origin(Bytes::new()).is_err());
    }
}

//! Smell categories and their message catalog
//!
//! Detectors only ever name an [`XmlDocSmell`]. The stable `DOCnnn` ids and
//! message templates live here so reporters can key off them; the gap between
//! DOC620 and DOC660 is kept free for semantic exception checks.

use serde::Serialize;

/// Category of documentation defect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum XmlDocSmell {
    UnknownTag,
    MissingEndTag,
    MissingDocumentation,
    MissingSummary,
    EmptySummary,
    ParamMissingName,
    MissingParamTag,
    EmptyParamDescription,
    UnknownParamTag,
    ParamRefNotEmpty,
    DuplicateParamTag,
    TypeParamMissingName,
    MissingTypeParamTag,
    EmptyTypeParamDescription,
    UnknownTypeParamTag,
    TypeParamRefNotEmpty,
    DuplicateTypeParamTag,
    MissingReturns,
    EmptyReturns,
    ReturnsOnVoidMember,
    DuplicateReturnsTag,
    ExceptionMissingCref,
    EmptyExceptionDescription,
    DuplicateExceptionTag,
    RethrowCannotInferException,
    InvalidTagOnMember,
}

impl XmlDocSmell {
    /// Stable rule id
    pub fn id(self) -> &'static str {
        match self {
            XmlDocSmell::UnknownTag => "DOC001",
            XmlDocSmell::MissingEndTag => "DOC002",
            XmlDocSmell::MissingDocumentation => "DOC100",
            XmlDocSmell::MissingSummary => "DOC200",
            XmlDocSmell::EmptySummary => "DOC210",
            XmlDocSmell::ParamMissingName => "DOC300",
            XmlDocSmell::MissingParamTag => "DOC310",
            XmlDocSmell::EmptyParamDescription => "DOC320",
            XmlDocSmell::UnknownParamTag => "DOC330",
            XmlDocSmell::ParamRefNotEmpty => "DOC340",
            XmlDocSmell::DuplicateParamTag => "DOC350",
            XmlDocSmell::TypeParamMissingName => "DOC400",
            XmlDocSmell::MissingTypeParamTag => "DOC410",
            XmlDocSmell::EmptyTypeParamDescription => "DOC420",
            XmlDocSmell::UnknownTypeParamTag => "DOC430",
            XmlDocSmell::TypeParamRefNotEmpty => "DOC440",
            XmlDocSmell::DuplicateTypeParamTag => "DOC450",
            XmlDocSmell::MissingReturns => "DOC500",
            XmlDocSmell::EmptyReturns => "DOC510",
            XmlDocSmell::ReturnsOnVoidMember => "DOC520",
            XmlDocSmell::DuplicateReturnsTag => "DOC530",
            XmlDocSmell::ExceptionMissingCref => "DOC600",
            XmlDocSmell::EmptyExceptionDescription => "DOC610",
            XmlDocSmell::DuplicateExceptionTag => "DOC620",
            XmlDocSmell::RethrowCannotInferException => "DOC660",
            XmlDocSmell::InvalidTagOnMember => "DOC700",
        }
    }

    /// Message template, `{0}`, `{1}` ... are filled from the finding's extra context
    pub fn message_template(self) -> &'static str {
        match self {
            XmlDocSmell::UnknownTag => "Unknown XML documentation tag <{0}>.",
            XmlDocSmell::MissingEndTag => "<{0}> is not closed.",
            XmlDocSmell::MissingDocumentation => "Missing XML documentation for {0} '{1}'.",
            XmlDocSmell::MissingSummary => "Missing <summary> in XML documentation.",
            XmlDocSmell::EmptySummary => "<summary> is empty.",
            XmlDocSmell::ParamMissingName => "<param> is missing the name attribute.",
            XmlDocSmell::MissingParamTag => "Missing <param> documentation for parameter '{0}'.",
            XmlDocSmell::EmptyParamDescription => "<param> description for '{0}' is empty.",
            XmlDocSmell::UnknownParamTag => "<param> references unknown parameter '{0}'.",
            XmlDocSmell::ParamRefNotEmpty => "<paramref> must be self-closing and empty.",
            XmlDocSmell::DuplicateParamTag => "<param> duplicated for parameter '{0}'.",
            XmlDocSmell::TypeParamMissingName => "<typeparam> is missing the name attribute.",
            XmlDocSmell::MissingTypeParamTag => "Missing <typeparam> documentation for type parameter '{0}'.",
            XmlDocSmell::EmptyTypeParamDescription => "<typeparam> description for '{0}' is empty.",
            XmlDocSmell::UnknownTypeParamTag => "<typeparam> references unknown type parameter '{0}'.",
            XmlDocSmell::TypeParamRefNotEmpty => "<typeparamref> must be self-closing and empty.",
            XmlDocSmell::DuplicateTypeParamTag => "<typeparam> duplicated for type parameter '{0}'.",
            XmlDocSmell::MissingReturns => "Missing <returns> documentation.",
            XmlDocSmell::EmptyReturns => "<returns> is empty.",
            XmlDocSmell::ReturnsOnVoidMember => "<returns> is not allowed on a member that returns void.",
            XmlDocSmell::DuplicateReturnsTag => "<returns> is duplicated.",
            XmlDocSmell::ExceptionMissingCref => "<exception> is missing the cref attribute.",
            XmlDocSmell::EmptyExceptionDescription => "<exception> description for '{0}' is empty.",
            XmlDocSmell::DuplicateExceptionTag => "<exception> duplicated for '{0}'.",
            XmlDocSmell::RethrowCannotInferException => {
                "Rethrow ('throw;') cannot be mapped to a documented exception type; review the <exception> tags manually."
            }
            XmlDocSmell::InvalidTagOnMember => "<{0}> is not valid on this {1}.",
        }
    }

    /// Fill the message template with positional arguments
    ///
    /// Placeholders without a matching argument are left as written.
    pub fn format_message(self, args: &[String]) -> String {
        let mut message = self.message_template().to_string();
        for (i, arg) in args.iter().enumerate() {
            message = message.replace(&format!("{{{}}}", i), arg);
        }
        message
    }
}

impl std::fmt::Display for XmlDocSmell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        let message = XmlDocSmell::MissingParamTag.format_message(&["count".to_string()]);
        assert_eq!(message, "Missing <param> documentation for parameter 'count'.");
    }

    #[test]
    fn test_format_message_keeps_unfilled_placeholders() {
        let message = XmlDocSmell::InvalidTagOnMember.format_message(&["value".to_string()]);
        assert_eq!(message, "<value> is not valid on this {1}.");
    }

    #[test]
    fn test_ids_are_unique() {
        let all = [
            XmlDocSmell::UnknownTag,
            XmlDocSmell::MissingEndTag,
            XmlDocSmell::MissingDocumentation,
            XmlDocSmell::MissingSummary,
            XmlDocSmell::EmptySummary,
            XmlDocSmell::ParamMissingName,
            XmlDocSmell::MissingParamTag,
            XmlDocSmell::EmptyParamDescription,
            XmlDocSmell::UnknownParamTag,
            XmlDocSmell::ParamRefNotEmpty,
            XmlDocSmell::DuplicateParamTag,
            XmlDocSmell::TypeParamMissingName,
            XmlDocSmell::MissingTypeParamTag,
            XmlDocSmell::EmptyTypeParamDescription,
            XmlDocSmell::UnknownTypeParamTag,
            XmlDocSmell::TypeParamRefNotEmpty,
            XmlDocSmell::DuplicateTypeParamTag,
            XmlDocSmell::MissingReturns,
            XmlDocSmell::EmptyReturns,
            XmlDocSmell::ReturnsOnVoidMember,
            XmlDocSmell::DuplicateReturnsTag,
            XmlDocSmell::ExceptionMissingCref,
            XmlDocSmell::EmptyExceptionDescription,
            XmlDocSmell::DuplicateExceptionTag,
            XmlDocSmell::RethrowCannotInferException,
            XmlDocSmell::InvalidTagOnMember,
        ];
        let ids: std::collections::HashSet<&str> = all.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), all.len());
    }
}

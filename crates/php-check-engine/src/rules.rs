//! Builtin rule definitions.
//!
//! Rules are grouped into the sets bundles activate: `deprecations` covers
//! APIs removed or deprecated by PHP itself, `analysis` covers correctness
//! and hygiene. Patterns are compiled at session inception, never lazily
//! mid-scan.

use php_check_core::{EngineError, Severity};
use regex::Regex;

/// A builtin pattern rule before compilation.
#[derive(Debug, Clone, Copy)]
pub struct RuleDef {
    /// Rule code (e.g., "D001").
    pub code: &'static str,
    /// Kebab-case rule name.
    pub name: &'static str,
    /// Regex source matched against each line.
    pub pattern: &'static str,
    /// Severity of findings from this rule.
    pub severity: Severity,
    /// Minimum analysis level at which this rule runs.
    pub min_level: u8,
    /// Message attached to findings.
    pub message: &'static str,
    /// Optional fix hint.
    pub help: Option<&'static str>,
}

/// Deprecated-API rules (group `deprecations`).
pub const DEPRECATION_RULES: &[RuleDef] = &[
    RuleDef {
        code: "D001",
        name: "no-create-function",
        pattern: r"\bcreate_function\s*\(",
        severity: Severity::Error,
        min_level: 0,
        message: "create_function() was removed in PHP 8.0",
        help: Some("Use an anonymous function instead"),
    },
    RuleDef {
        code: "D002",
        name: "no-each",
        pattern: r"\beach\s*\(",
        severity: Severity::Error,
        min_level: 0,
        message: "each() was removed in PHP 8.0",
        help: Some("Iterate with foreach instead"),
    },
    RuleDef {
        code: "D003",
        name: "no-posix-regex",
        pattern: r"\b(ereg|eregi|ereg_replace|eregi_replace|split|spliti)\s*\(",
        severity: Severity::Error,
        min_level: 0,
        message: "POSIX regex functions were removed in PHP 7.0",
        help: Some("Use the preg_* family instead"),
    },
    RuleDef {
        code: "D004",
        name: "no-mysql-extension",
        pattern: r"\bmysql_[a-z_]+\s*\(",
        severity: Severity::Error,
        min_level: 0,
        message: "The mysql extension was removed in PHP 7.0",
        help: Some("Use mysqli or PDO instead"),
    },
    RuleDef {
        code: "D005",
        name: "no-magic-quotes",
        pattern: r"\bget_magic_quotes_(gpc|runtime)\s*\(",
        severity: Severity::Error,
        min_level: 0,
        message: "get_magic_quotes_gpc()/get_magic_quotes_runtime() were removed in PHP 8.0",
        help: Some("Magic quotes are always off since PHP 5.4; drop the call"),
    },
    RuleDef {
        code: "D006",
        name: "no-money-format",
        pattern: r"\bmoney_format\s*\(",
        severity: Severity::Error,
        min_level: 0,
        message: "money_format() was removed in PHP 8.0",
        help: Some("Use NumberFormatter::formatCurrency() instead"),
    },
    RuleDef {
        code: "D007",
        name: "no-utf8-encode",
        pattern: r"\butf8_(encode|decode)\s*\(",
        severity: Severity::Error,
        min_level: 0,
        message: "utf8_encode() and utf8_decode() are deprecated since PHP 8.2",
        help: Some("Use mb_convert_encoding() instead"),
    },
    RuleDef {
        code: "D008",
        name: "no-strftime",
        pattern: r"\b(strftime|gmstrftime)\s*\(",
        severity: Severity::Error,
        min_level: 0,
        message: "strftime() and gmstrftime() are deprecated since PHP 8.1",
        help: Some("Use date() or IntlDateFormatter instead"),
    },
    RuleDef {
        code: "D009",
        name: "no-filter-sanitize-string",
        pattern: r"\bFILTER_SANITIZE_STRING\b",
        severity: Severity::Error,
        min_level: 0,
        message: "FILTER_SANITIZE_STRING is deprecated since PHP 8.1",
        help: Some("Use htmlspecialchars() instead"),
    },
    RuleDef {
        code: "D010",
        name: "no-session-register",
        pattern: r"\bsession_(register|unregister|is_registered)\s*\(",
        severity: Severity::Error,
        min_level: 0,
        message: "session_register() and friends were removed in PHP 5.4",
        help: Some("Use $_SESSION directly instead"),
    },
];

/// Correctness and hygiene rules (group `analysis`).
pub const ANALYSIS_RULES: &[RuleDef] = &[
    RuleDef {
        code: "A001",
        name: "no-eval",
        pattern: r"\beval\s*\(",
        severity: Severity::Error,
        min_level: 0,
        message: "eval() executes arbitrary code",
        help: Some("Refactor to avoid runtime code generation"),
    },
    RuleDef {
        code: "A002",
        name: "no-shell-exec",
        pattern: r"\b(shell_exec|exec|system|passthru|proc_open|popen)\s*\(",
        severity: Severity::Error,
        min_level: 0,
        message: "Shell execution from PHP is prone to injection",
        help: Some("Escape arguments with escapeshellarg()"),
    },
    RuleDef {
        code: "A003",
        name: "no-goto",
        pattern: r"\bgoto\s+[a-zA-Z_]",
        severity: Severity::Error,
        min_level: 0,
        message: "goto obscures control flow",
        help: Some("Restructure with loops or functions"),
    },
    RuleDef {
        code: "A004",
        name: "no-extract",
        pattern: r"\bextract\s*\(",
        severity: Severity::Error,
        min_level: 2,
        message: "extract() creates variables from array keys",
        help: Some("Read the array keys explicitly"),
    },
    RuleDef {
        code: "A005",
        name: "no-error-suppression",
        pattern: r"(^|[\s=(,])@[a-zA-Z_\\$]",
        severity: Severity::Warning,
        min_level: 2,
        message: "The @ operator hides errors",
        help: Some("Handle the failure instead of suppressing it"),
    },
    RuleDef {
        code: "A006",
        name: "no-debug-output",
        pattern: r"\b(var_dump|print_r|var_export)\s*\(",
        severity: Severity::Warning,
        min_level: 2,
        message: "Debug output left in code",
        help: Some("Remove the call or route it through a logger"),
    },
    RuleDef {
        code: "A007",
        name: "no-exit",
        pattern: r"\b(die|exit)\s*[;(]",
        severity: Severity::Warning,
        min_level: 2,
        message: "die()/exit() ends the request abruptly",
        help: Some("Throw an exception or return instead"),
    },
];

/// Returns the builtin rule group named `name`.
#[must_use]
pub fn group(name: &str) -> Option<&'static [RuleDef]> {
    match name {
        "deprecations" => Some(DEPRECATION_RULES),
        "analysis" => Some(ANALYSIS_RULES),
        _ => None,
    }
}

/// A rule compiled and ready to match.
#[derive(Debug)]
pub struct CompiledRule {
    /// Definition this rule was compiled from.
    pub def: RuleDef,
    /// Compiled line pattern.
    pub regex: Regex,
}

/// Compiles the rules of `groups` gated at `level`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidConfiguration`] for an unknown group name
/// and [`EngineError::Invariant`] for a builtin pattern that fails to
/// compile.
pub fn compile(groups: &[String], level: u8) -> Result<Vec<CompiledRule>, EngineError> {
    let mut compiled = Vec::new();
    for name in groups {
        let defs = group(name).ok_or_else(|| EngineError::InvalidConfiguration {
            message: format!("unknown rule group \"{name}\""),
        })?;
        for def in defs {
            if def.min_level > level {
                continue;
            }
            let regex = Regex::new(def.pattern).map_err(|e| EngineError::Invariant {
                message: format!("rule {} has a broken pattern: {e}", def.code),
            })?;
            compiled.push(CompiledRule { def: *def, regex });
        }
    }
    Ok(compiled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compiled(name: &str, level: u8) -> Vec<CompiledRule> {
        compile(&[name.to_string()], level).unwrap()
    }

    fn rule<'a>(rules: &'a [CompiledRule], code: &str) -> &'a CompiledRule {
        rules
            .iter()
            .find(|r| r.def.code == code)
            .unwrap_or_else(|| panic!("rule {code} not compiled"))
    }

    #[test]
    fn all_builtin_patterns_compile() {
        for def in DEPRECATION_RULES.iter().chain(ANALYSIS_RULES) {
            assert!(Regex::new(def.pattern).is_ok(), "pattern of {}", def.code);
        }
    }

    #[test]
    fn rule_codes_are_unique() {
        let mut codes: Vec<&str> = DEPRECATION_RULES
            .iter()
            .chain(ANALYSIS_RULES)
            .map(|d| d.code)
            .collect();
        let total = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), total);
    }

    #[test]
    fn unknown_group_is_invalid_configuration() {
        let err = compile(&["style".to_string()], 0).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("style"));
    }

    #[test]
    fn level_gates_stricter_rules() {
        let base = compiled("analysis", 0);
        let strict = compiled("analysis", 2);
        assert!(base.iter().all(|r| r.def.min_level == 0));
        assert!(strict.len() > base.len());
    }

    #[test]
    fn create_function_is_flagged() {
        let rules = compiled("deprecations", 0);
        let r = rule(&rules, "D001");
        assert!(r.regex.is_match("$fn = create_function('$a', 'return $a;');"));
        assert!(r.regex.is_match("create_function ($args, $code)"));
        assert!(!r.regex.is_match("$this->create_function_name()"));
    }

    #[test]
    fn foreach_is_not_each() {
        let rules = compiled("deprecations", 0);
        let r = rule(&rules, "D002");
        assert!(r.regex.is_match("while (list($k, $v) = each($arr)) {"));
        assert!(!r.regex.is_match("foreach ($arr as $v) {"));
    }

    #[test]
    fn str_split_is_not_posix_split() {
        let rules = compiled("deprecations", 0);
        let r = rule(&rules, "D003");
        assert!(r.regex.is_match("$parts = split(',', $line);"));
        assert!(!r.regex.is_match("$parts = str_split($line);"));
        assert!(!r.regex.is_match("$parts = preg_split('/,/', $line);"));
    }

    #[test]
    fn mysqli_is_not_the_mysql_extension() {
        let rules = compiled("deprecations", 0);
        let r = rule(&rules, "D004");
        assert!(r.regex.is_match("$link = mysql_connect($host);"));
        assert!(r.regex.is_match("mysql_real_escape_string($value)"));
        assert!(!r.regex.is_match("$link = mysqli_connect($host);"));
    }

    #[test]
    fn goto_requires_a_label() {
        let rules = compiled("analysis", 0);
        let r = rule(&rules, "A003");
        assert!(r.regex.is_match("goto cleanup;"));
        assert!(!r.regex.is_match("$goto = 1;"));
    }

    #[test]
    fn error_suppression_matches_call_sites() {
        let rules = compiled("analysis", 2);
        let r = rule(&rules, "A005");
        assert!(r.regex.is_match("$content = @file_get_contents($url);"));
        assert!(r.regex.is_match("@unlink($path);"));
        assert!(!r.regex.is_match("$email = 'user@example.com';"));
    }

    #[test]
    fn exit_and_die_match_statement_forms() {
        let rules = compiled("analysis", 2);
        let r = rule(&rules, "A007");
        assert!(r.regex.is_match("die('fatal');"));
        assert!(r.regex.is_match("exit;"));
        assert!(r.regex.is_match("exit(1);"));
        assert!(!r.regex.is_match("$exited = true;"));
    }
}

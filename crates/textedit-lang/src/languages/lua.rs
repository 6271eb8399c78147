use super::{FLOAT_RULE, HEX_RULE, IDENTIFIER_RULE, INTEGER_RULE, PUNCTUATION_RULE, STRING_RULE};
use crate::{CommentConfig, LanguageBuilder, LanguageDefinition, PaletteIndex};

const KEYWORDS: &[&str] = &[
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "goto", "if",
    "in", "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

const IDENTIFIERS: &[&str] = &[
    "assert", "collectgarbage", "dofile", "error", "getmetatable", "ipairs", "loadfile", "load",
    "loadstring", "next", "pairs", "pcall", "print", "rawequal", "rawlen", "rawget", "rawset",
    "select", "setmetatable", "tonumber", "tostring", "type", "xpcall", "_G", "_VERSION",
    "arshift", "band", "bnot", "bor", "bxor", "btest", "extract", "lrotate", "lshift",
    "replace", "rrotate", "rshift", "create", "resume", "running", "status", "wrap", "yield",
    "isyieldable", "debug", "getuservalue", "gethook", "getinfo", "getlocal", "getregistry",
    "getmetatable", "getupvalue", "upvaluejoin", "upvalueid", "setuservalue", "sethook",
    "setlocal", "setmetatable", "setupvalue", "traceback", "close", "flush", "input", "lines",
    "open", "output", "popen", "read", "tmpfile", "type", "write", "clock", "date", "difftime",
    "execute", "exit", "getenv", "remove", "rename", "setlocale", "time", "tmpname", "byte",
    "char", "dump", "find", "format", "gmatch", "gsub", "len", "lower", "match", "rep",
    "reverse", "sub", "upper", "pack", "packsize", "unpack", "concat", "maxn", "insert",
    "sort", "remove", "abs", "acos", "asin", "atan", "ceil", "cos", "deg", "exp", "tointeger",
    "floor", "fmod", "ult", "log", "max", "min", "modf", "rad", "random", "randomseed", "sin",
    "sqrt", "string", "tan", "huge", "maxinteger", "mininteger", "pi", "loadlib", "searchpath",
    "seeall", "preload", "cpath", "path", "searchers", "loaded", "module", "require", "utf8",
    "codepoint", "codes", "charpattern", "coroutine", "table", "io", "os", "math", "package",
];

pub(super) fn lua() -> LanguageBuilder {
    LanguageDefinition::builder("Lua")
        .keywords(KEYWORDS.iter().copied())
        .identifiers(IDENTIFIERS.iter().copied(), "Built-in function")
        .comments(CommentConfig::line_and_block("--", "--[[", "]]"))
        .preproc_char(None)
        .auto_indentation(false)
        .token_rule(STRING_RULE, PaletteIndex::String)
        .token_rule(r"'[^']*'", PaletteIndex::String)
        .token_rule(HEX_RULE, PaletteIndex::Number)
        .token_rule(FLOAT_RULE, PaletteIndex::Number)
        .token_rule(INTEGER_RULE, PaletteIndex::Number)
        .token_rule(IDENTIFIER_RULE, PaletteIndex::Identifier)
        .token_rule(PUNCTUATION_RULE, PaletteIndex::Punctuation)
}

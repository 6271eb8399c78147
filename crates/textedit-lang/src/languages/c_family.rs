use super::c_like_rules;
use crate::{CStyleTokenizer, CommentConfig, LanguageBuilder, LanguageDefinition};

const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "atomic_cancel", "atomic_commit",
    "atomic_noexcept", "auto", "bitand", "bitor", "bool", "break", "case", "catch", "char",
    "char16_t", "char32_t", "class", "compl", "concept", "const", "constexpr", "const_cast",
    "continue", "decltype", "default", "delete", "do", "double", "dynamic_cast", "else", "enum",
    "explicit", "export", "extern", "false", "float", "for", "friend", "goto", "if", "import",
    "inline", "int", "long", "module", "mutable", "namespace", "new", "noexcept", "not",
    "not_eq", "nullptr", "operator", "or", "or_eq", "private", "protected", "public",
    "register", "reinterpret_cast", "requires", "return", "short", "signed", "sizeof", "static",
    "static_assert", "static_cast", "struct", "switch", "synchronized", "template", "this",
    "thread_local", "throw", "true", "try", "typedef", "typeid", "typename", "union",
    "unsigned", "using", "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq",
];

const CPP_IDENTIFIERS: &[&str] = &[
    "abort", "abs", "acos", "asin", "atan", "atexit", "atof", "atoi", "atol", "ceil", "clock",
    "cosh", "ctime", "div", "exit", "fabs", "floor", "fmod", "getchar", "getenv", "isalnum",
    "isalpha", "isdigit", "isgraph", "ispunct", "isspace", "isupper", "kbhit", "log10", "log2",
    "log", "memcmp", "modf", "pow", "printf", "sprintf", "snprintf", "putchar", "putenv",
    "puts", "rand", "remove", "rename", "sinh", "sqrt", "srand", "strcat", "strcmp",
    "strerror", "time", "tolower", "toupper", "std", "string", "vector", "map",
    "unordered_map", "set", "unordered_set", "min", "max",
];

const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while", "_Alignas", "_Alignof", "_Atomic",
    "_Bool", "_Complex", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert",
    "_Thread_local",
];

const C_IDENTIFIERS: &[&str] = &[
    "abort", "abs", "acos", "asin", "atan", "atexit", "atof", "atoi", "atol", "ceil", "clock",
    "cosh", "ctime", "div", "exit", "fabs", "floor", "fmod", "getchar", "getenv", "isalnum",
    "isalpha", "isdigit", "isgraph", "ispunct", "isspace", "isupper", "kbhit", "log10", "log2",
    "log", "memcmp", "modf", "pow", "putchar", "putenv", "puts", "rand", "remove", "rename",
    "sinh", "sqrt", "srand", "strcat", "strcmp", "strerror", "time", "tolower", "toupper",
];

const HLSL_KEYWORDS: &[&str] = &[
    "AppendStructuredBuffer", "asm", "asm_fragment", "BlendState", "bool", "break", "Buffer",
    "ByteAddressBuffer", "case", "cbuffer", "centroid", "class", "column_major", "compile",
    "compile_fragment", "CompileShader", "const", "continue", "ComputeShader",
    "ConsumeStructuredBuffer", "default", "DepthStencilState", "DepthStencilView", "discard",
    "do", "double", "DomainShader", "dword", "else", "export", "extern", "false", "float", "for",
    "fxgroup", "GeometryShader", "groupshared", "half", "Hullshader", "if", "in", "inline",
    "inout", "InputPatch", "int", "interface", "line", "lineadj", "linear", "LineStream",
    "matrix", "min16float", "min10float", "min16int", "min12int", "min16uint", "namespace",
    "nointerpolation", "noperspective", "NULL", "out", "OutputPatch", "packoffset", "pass",
    "pixelfragment", "PixelShader", "point", "PointStream", "precise", "RasterizerState",
    "RenderTargetView", "return", "register", "row_major", "RWBuffer", "RWByteAddressBuffer",
    "RWStructuredBuffer", "RWTexture1D", "RWTexture1DArray", "RWTexture2D", "RWTexture2DArray",
    "RWTexture3D", "sample", "sampler", "SamplerState", "SamplerComparisonState", "shared",
    "snorm", "stateblock", "stateblock_state", "static", "string", "struct", "switch",
    "StructuredBuffer", "tbuffer", "technique", "technique10", "technique11", "texture",
    "Texture1D", "Texture1DArray", "Texture2D", "Texture2DArray", "Texture2DMS",
    "Texture2DMSArray", "Texture3D", "TextureCube", "TextureCubeArray", "true", "typedef",
    "triangle", "triangleadj", "TriangleStream", "uint", "uniform", "unorm", "unsigned",
    "vector", "vertexfragment", "VertexShader", "void", "volatile", "while", "bool1", "bool2",
    "bool3", "bool4", "double1", "double2", "double3", "double4", "float1", "float2", "float3",
    "float4", "int1", "int2", "int3", "int4", "uint1", "uint2", "uint3", "uint4", "half1",
    "half2", "half3", "half4", "float1x1", "float2x2", "float3x3", "float4x4", "float2x3",
    "float3x2", "float3x4", "float4x3",
];

const HLSL_IDENTIFIERS: &[&str] = &[
    "abort", "abs", "acos", "all", "AllMemoryBarrier", "AllMemoryBarrierWithGroupSync", "any",
    "asdouble", "asfloat", "asin", "asint", "asuint", "atan", "atan2", "ceil",
    "CheckAccessFullyMapped", "clamp", "clip", "cos", "cosh", "countbits", "cross",
    "D3DCOLORtoUBYTE4", "ddx", "ddx_coarse", "ddx_fine", "ddy", "ddy_coarse", "ddy_fine",
    "degrees", "determinant", "DeviceMemoryBarrier", "DeviceMemoryBarrierWithGroupSync",
    "distance", "dot", "dst", "errorf", "EvaluateAttributeAtCentroid",
    "EvaluateAttributeAtSample", "EvaluateAttributeSnapped", "exp", "exp2", "f16tof32",
    "f32tof16", "faceforward", "firstbithigh", "firstbitlow", "floor", "fma", "fmod", "frac",
    "frexp", "fwidth", "GetRenderTargetSampleCount", "GetRenderTargetSamplePosition",
    "GroupMemoryBarrier", "GroupMemoryBarrierWithGroupSync", "InterlockedAdd",
    "InterlockedAnd", "InterlockedCompareExchange", "InterlockedCompareStore",
    "InterlockedExchange", "InterlockedMax", "InterlockedMin", "InterlockedOr",
    "InterlockedXor", "isfinite", "isinf", "isnan", "ldexp", "length", "lerp", "lit", "log",
    "log10", "log2", "mad", "max", "min", "modf", "msad4", "mul", "noise", "normalize", "pow",
    "printf", "Process2DQuadTessFactorsAvg", "Process2DQuadTessFactorsMax",
    "Process2DQuadTessFactorsMin", "ProcessIsolineTessFactors", "ProcessQuadTessFactorsAvg",
    "ProcessQuadTessFactorsMax", "ProcessQuadTessFactorsMin", "ProcessTriTessFactorsAvg",
    "ProcessTriTessFactorsMax", "ProcessTriTessFactorsMin", "radians", "rcp", "reflect",
    "refract", "reversebits", "round", "rsqrt", "saturate", "sign", "sin", "sincos", "sinh",
    "smoothstep", "sqrt", "step", "tan", "tanh", "tex1D", "tex1Dbias", "tex1Dgrad", "tex1Dlod",
    "tex1Dproj", "tex2D", "tex2Dbias", "tex2Dgrad", "tex2Dlod", "tex2Dproj", "tex3D",
    "tex3Dbias", "tex3Dgrad", "tex3Dlod", "tex3Dproj", "texCUBE", "texCUBEbias", "texCUBEgrad",
    "texCUBElod", "texCUBEproj", "transpose", "trunc",
];

const GLSL_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while", "_Alignas", "_Alignof", "_Atomic",
    "_Bool", "_Complex", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert",
    "_Thread_local", "attribute", "uniform", "varying", "layout", "centroid", "flat", "smooth",
    "noperspective", "patch", "sample", "subroutine", "in", "out", "inout", "bool", "true",
    "false", "invariant", "precise", "discard", "mat2", "mat3", "mat4", "dmat2", "dmat3",
    "dmat4", "vec2", "vec3", "vec4", "ivec2", "ivec3", "ivec4", "bvec2", "bvec3", "bvec4",
    "dvec2", "dvec3", "dvec4", "uint", "uvec2", "uvec3", "uvec4", "lowp", "mediump", "highp",
    "precision", "sampler1D", "sampler2D", "sampler3D", "samplerCube", "sampler2DShadow",
];

const GLSL_IDENTIFIERS: &[&str] = &[
    "abs", "acos", "asin", "atan", "ceil", "clamp", "cos", "cross", "degrees", "distance",
    "dot", "exp", "exp2", "faceforward", "floor", "fract", "inversesqrt", "length", "log",
    "log2", "max", "min", "mix", "mod", "normalize", "pow", "radians", "reflect", "refract",
    "sign", "sin", "smoothstep", "sqrt", "step", "tan", "texture", "texture2D", "textureCube",
    "transpose", "inverse", "dFdx", "dFdy", "fwidth",
];

const ANGEL_SCRIPT_KEYWORDS: &[&str] = &[
    "and", "abstract", "auto", "bool", "break", "case", "cast", "class", "const", "continue",
    "default", "do", "double", "else", "enum", "false", "final", "float", "for", "from",
    "funcdef", "function", "get", "if", "import", "in", "inout", "int", "interface", "int8",
    "int16", "int32", "int64", "is", "mixin", "namespace", "not", "null", "or", "out",
    "override", "private", "protected", "return", "set", "shared", "super", "switch", "this",
    "true", "typedef", "uint", "uint8", "uint16", "uint32", "uint64", "void", "while", "xor",
];

const ANGEL_SCRIPT_IDENTIFIERS: &[&str] = &[
    "cos", "sin", "tan", "acos", "asin", "atan", "atan2", "cosh", "sinh", "tanh", "log",
    "log10", "pow", "sqrt", "abs", "ceil", "floor", "fraction", "closeTo", "fpFromIEEE",
    "fpToIEEE", "complex", "opEquals", "opAddAssign", "opSubAssign", "opMulAssign",
    "opDivAssign", "opAdd", "opSub", "opMul", "opDiv", "array", "string", "dictionary", "ref",
    "weakref", "any", "grid", "print",
];

pub(super) fn cpp() -> LanguageBuilder {
    LanguageDefinition::builder("C++")
        .keywords(CPP_KEYWORDS.iter().copied())
        .identifiers(CPP_IDENTIFIERS.iter().copied(), "Built-in function")
        .comments(CommentConfig::c_style())
        .tokenizer(CStyleTokenizer)
}

pub(super) fn c() -> LanguageBuilder {
    c_like_rules(
        LanguageDefinition::builder("C")
            .keywords(C_KEYWORDS.iter().copied())
            .identifiers(C_IDENTIFIERS.iter().copied(), "Built-in function")
            .comments(CommentConfig::c_style()),
    )
}

pub(super) fn hlsl() -> LanguageBuilder {
    c_like_rules(
        LanguageDefinition::builder("HLSL")
            .keywords(HLSL_KEYWORDS.iter().copied())
            .identifiers(HLSL_IDENTIFIERS.iter().copied(), "Built-in function")
            .comments(CommentConfig::c_style()),
    )
}

pub(super) fn glsl() -> LanguageBuilder {
    c_like_rules(
        LanguageDefinition::builder("GLSL")
            .keywords(GLSL_KEYWORDS.iter().copied())
            .identifiers(GLSL_IDENTIFIERS.iter().copied(), "Built-in function")
            .comments(CommentConfig::c_style()),
    )
}

pub(super) fn angel_script() -> LanguageBuilder {
    c_like_rules(
        LanguageDefinition::builder("AngelScript")
            .keywords(ANGEL_SCRIPT_KEYWORDS.iter().copied())
            .identifiers(ANGEL_SCRIPT_IDENTIFIERS.iter().copied(), "Built-in function")
            .comments(CommentConfig::c_style()),
    )
}

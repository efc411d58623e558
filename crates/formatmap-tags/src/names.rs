//! The classification tag vocabulary.
//!
//! Flat constants, one per tag. The string values are what themes and
//! settings files use as keys.

use crate::ClassificationTag;

// Language elements
pub const IDENTIFIER: ClassificationTag = ClassificationTag::from_static("identifier");
pub const LITERAL: ClassificationTag = ClassificationTag::from_static("literal");
pub const TEXT: ClassificationTag = ClassificationTag::from_static("text");
pub const OPERATOR: ClassificationTag = ClassificationTag::from_static("operator");
pub const PUNCTUATION: ClassificationTag = ClassificationTag::from_static("punctuation");
pub const NUMBER: ClassificationTag = ClassificationTag::from_static("number");
pub const COMMENT: ClassificationTag = ClassificationTag::from_static("comment");
pub const KEYWORD: ClassificationTag = ClassificationTag::from_static("keyword");
pub const STRING: ClassificationTag = ClassificationTag::from_static("string");
pub const VERBATIM_STRING: ClassificationTag = ClassificationTag::from_static("string - verbatim");
pub const CHAR: ClassificationTag = ClassificationTag::from_static("character");

// Types and members
pub const NAMESPACE: ClassificationTag = ClassificationTag::from_static("namespace");
pub const TYPE: ClassificationTag = ClassificationTag::from_static("class name");
pub const SEALED_TYPE: ClassificationTag = ClassificationTag::from_static("sealed type");
pub const STATIC_TYPE: ClassificationTag = ClassificationTag::from_static("static type");
pub const DELEGATE: ClassificationTag = ClassificationTag::from_static("delegate name");
pub const ENUM: ClassificationTag = ClassificationTag::from_static("enum name");
pub const INTERFACE: ClassificationTag = ClassificationTag::from_static("interface name");
pub const VALUE_TYPE: ClassificationTag = ClassificationTag::from_static("struct name");
pub const MODULE: ClassificationTag = ClassificationTag::from_static("module name");
pub const TYPE_GENERIC_PARAMETER: ClassificationTag =
    ClassificationTag::from_static("type parameter name");
pub const METHOD_GENERIC_PARAMETER: ClassificationTag =
    ClassificationTag::from_static("method generic parameter");
pub const INSTANCE_METHOD: ClassificationTag = ClassificationTag::from_static("instance method");
pub const STATIC_METHOD: ClassificationTag = ClassificationTag::from_static("static method");
pub const EXTENSION_METHOD: ClassificationTag = ClassificationTag::from_static("extension method");
pub const INSTANCE_FIELD: ClassificationTag = ClassificationTag::from_static("instance field");
pub const ENUM_FIELD: ClassificationTag = ClassificationTag::from_static("enum field");
pub const LITERAL_FIELD: ClassificationTag = ClassificationTag::from_static("literal field");
pub const STATIC_FIELD: ClassificationTag = ClassificationTag::from_static("static field");
pub const INSTANCE_EVENT: ClassificationTag = ClassificationTag::from_static("instance event");
pub const STATIC_EVENT: ClassificationTag = ClassificationTag::from_static("static event");
pub const INSTANCE_PROPERTY: ClassificationTag =
    ClassificationTag::from_static("instance property");
pub const STATIC_PROPERTY: ClassificationTag = ClassificationTag::from_static("static property");
pub const LOCAL: ClassificationTag = ClassificationTag::from_static("local");
pub const PARAMETER: ClassificationTag = ClassificationTag::from_static("parameter");

// Preprocessor and IL
pub const PREPROCESSOR_KEYWORD: ClassificationTag =
    ClassificationTag::from_static("preprocessor keyword");
pub const PREPROCESSOR_TEXT: ClassificationTag =
    ClassificationTag::from_static("preprocessor text");
pub const LABEL: ClassificationTag = ClassificationTag::from_static("label");
pub const OP_CODE: ClassificationTag = ClassificationTag::from_static("op code");
pub const IL_DIRECTIVE: ClassificationTag = ClassificationTag::from_static("il directive");
pub const IL_MODULE: ClassificationTag = ClassificationTag::from_static("il module");
pub const EXCLUDED_CODE: ClassificationTag = ClassificationTag::from_static("excluded code");

// XML documentation comments
pub const XML_DOC_COMMENT_ATTRIBUTE_NAME: ClassificationTag =
    ClassificationTag::from_static("xml doc comment - attribute name");
pub const XML_DOC_COMMENT_ATTRIBUTE_QUOTES: ClassificationTag =
    ClassificationTag::from_static("xml doc comment - attribute quotes");
pub const XML_DOC_COMMENT_ATTRIBUTE_VALUE: ClassificationTag =
    ClassificationTag::from_static("xml doc comment - attribute value");
pub const XML_DOC_COMMENT_CDATA_SECTION: ClassificationTag =
    ClassificationTag::from_static("xml doc comment - cdata section");
pub const XML_DOC_COMMENT_COMMENT: ClassificationTag =
    ClassificationTag::from_static("xml doc comment - comment");
pub const XML_DOC_COMMENT_DELIMITER: ClassificationTag =
    ClassificationTag::from_static("xml doc comment - delimiter");
pub const XML_DOC_COMMENT_ENTITY_REFERENCE: ClassificationTag =
    ClassificationTag::from_static("xml doc comment - entity reference");
pub const XML_DOC_COMMENT_NAME: ClassificationTag =
    ClassificationTag::from_static("xml doc comment - name");
pub const XML_DOC_COMMENT_PROCESSING_INSTRUCTION: ClassificationTag =
    ClassificationTag::from_static("xml doc comment - processing instruction");
pub const XML_DOC_COMMENT_TEXT: ClassificationTag =
    ClassificationTag::from_static("xml doc comment - text");

// XML literals
pub const XML_LITERAL_ATTRIBUTE_NAME: ClassificationTag =
    ClassificationTag::from_static("xml literal - attribute name");
pub const XML_LITERAL_ATTRIBUTE_QUOTES: ClassificationTag =
    ClassificationTag::from_static("xml literal - attribute quotes");
pub const XML_LITERAL_ATTRIBUTE_VALUE: ClassificationTag =
    ClassificationTag::from_static("xml literal - attribute value");
pub const XML_LITERAL_CDATA_SECTION: ClassificationTag =
    ClassificationTag::from_static("xml literal - cdata section");
pub const XML_LITERAL_COMMENT: ClassificationTag =
    ClassificationTag::from_static("xml literal - comment");
pub const XML_LITERAL_DELIMITER: ClassificationTag =
    ClassificationTag::from_static("xml literal - delimiter");
pub const XML_LITERAL_EMBEDDED_EXPRESSION: ClassificationTag =
    ClassificationTag::from_static("xml literal - embedded expression");
pub const XML_LITERAL_ENTITY_REFERENCE: ClassificationTag =
    ClassificationTag::from_static("xml literal - entity reference");
pub const XML_LITERAL_NAME: ClassificationTag =
    ClassificationTag::from_static("xml literal - name");
pub const XML_LITERAL_PROCESSING_INSTRUCTION: ClassificationTag =
    ClassificationTag::from_static("xml literal - processing instruction");
pub const XML_LITERAL_TEXT: ClassificationTag =
    ClassificationTag::from_static("xml literal - text");

// XML documents
pub const XML_ATTRIBUTE: ClassificationTag = ClassificationTag::from_static("xml attribute");
pub const XML_ATTRIBUTE_QUOTES: ClassificationTag =
    ClassificationTag::from_static("xml attribute quotes");
pub const XML_ATTRIBUTE_VALUE: ClassificationTag =
    ClassificationTag::from_static("xml attribute value");
pub const XML_CDATA_SECTION: ClassificationTag =
    ClassificationTag::from_static("xml cdata section");
pub const XML_COMMENT: ClassificationTag = ClassificationTag::from_static("xml comment");
pub const XML_DELIMITER: ClassificationTag = ClassificationTag::from_static("xml delimiter");
pub const XML_KEYWORD: ClassificationTag = ClassificationTag::from_static("xml keyword");
pub const XML_NAME: ClassificationTag = ClassificationTag::from_static("xml name");
pub const XML_PROCESSING_INSTRUCTION: ClassificationTag =
    ClassificationTag::from_static("xml processing instruction");
pub const XML_TEXT: ClassificationTag = ClassificationTag::from_static("xml text");

// XAML documents
pub const XAML_ATTRIBUTE: ClassificationTag = ClassificationTag::from_static("xaml attribute");
pub const XAML_ATTRIBUTE_QUOTES: ClassificationTag =
    ClassificationTag::from_static("xaml attribute quotes");
pub const XAML_ATTRIBUTE_VALUE: ClassificationTag =
    ClassificationTag::from_static("xaml attribute value");
pub const XAML_CDATA_SECTION: ClassificationTag =
    ClassificationTag::from_static("xaml cdata section");
pub const XAML_COMMENT: ClassificationTag = ClassificationTag::from_static("xaml comment");
pub const XAML_DELIMITER: ClassificationTag = ClassificationTag::from_static("xaml delimiter");
pub const XAML_KEYWORD: ClassificationTag = ClassificationTag::from_static("xaml keyword");
pub const XAML_MARKUP_EXTENSION_CLASS: ClassificationTag =
    ClassificationTag::from_static("xaml markup extension class");
pub const XAML_MARKUP_EXTENSION_PARAMETER_NAME: ClassificationTag =
    ClassificationTag::from_static("xaml markup extension parameter name");
pub const XAML_MARKUP_EXTENSION_PARAMETER_VALUE: ClassificationTag =
    ClassificationTag::from_static("xaml markup extension parameter value");
pub const XAML_NAME: ClassificationTag = ClassificationTag::from_static("xaml name");
pub const XAML_PROCESSING_INSTRUCTION: ClassificationTag =
    ClassificationTag::from_static("xaml processing instruction");
pub const XAML_TEXT: ClassificationTag = ClassificationTag::from_static("xaml text");

// Tool tips and assembly explorer
pub const XML_DOC_TOOL_TIP_HEADER: ClassificationTag =
    ClassificationTag::from_static("xml doc tool tip header");
pub const ASSEMBLY: ClassificationTag = ClassificationTag::from_static("assembly");
pub const ASSEMBLY_EXE: ClassificationTag = ClassificationTag::from_static("assembly exe");
pub const ASSEMBLY_MODULE: ClassificationTag = ClassificationTag::from_static("assembly module");
pub const DIRECTORY_PART: ClassificationTag = ClassificationTag::from_static("directory part");
pub const FILE_NAME_NO_EXTENSION: ClassificationTag =
    ClassificationTag::from_static("file name no extension");
pub const FILE_EXTENSION: ClassificationTag = ClassificationTag::from_static("file extension");

// REPL and evaluation output
pub const ERROR: ClassificationTag = ClassificationTag::from_static("error");
pub const TO_STRING_EVAL: ClassificationTag = ClassificationTag::from_static("to string eval");
pub const REPL_PROMPT_1: ClassificationTag = ClassificationTag::from_static("repl prompt 1");
pub const REPL_PROMPT_2: ClassificationTag = ClassificationTag::from_static("repl prompt 2");
pub const REPL_OUTPUT_TEXT: ClassificationTag = ClassificationTag::from_static("repl output text");
pub const REPL_SCRIPT_OUTPUT_TEXT: ClassificationTag =
    ClassificationTag::from_static("repl script output text");

// Console colors
pub const BLACK: ClassificationTag = ClassificationTag::from_static("black");
pub const BLUE: ClassificationTag = ClassificationTag::from_static("blue");
pub const CYAN: ClassificationTag = ClassificationTag::from_static("cyan");
pub const DARK_BLUE: ClassificationTag = ClassificationTag::from_static("dark blue");
pub const DARK_CYAN: ClassificationTag = ClassificationTag::from_static("dark cyan");
pub const DARK_GRAY: ClassificationTag = ClassificationTag::from_static("dark gray");
pub const DARK_GREEN: ClassificationTag = ClassificationTag::from_static("dark green");
pub const DARK_MAGENTA: ClassificationTag = ClassificationTag::from_static("dark magenta");
pub const DARK_RED: ClassificationTag = ClassificationTag::from_static("dark red");
pub const DARK_YELLOW: ClassificationTag = ClassificationTag::from_static("dark yellow");
pub const GRAY: ClassificationTag = ClassificationTag::from_static("gray");
pub const GREEN: ClassificationTag = ClassificationTag::from_static("green");
pub const MAGENTA: ClassificationTag = ClassificationTag::from_static("magenta");
pub const RED: ClassificationTag = ClassificationTag::from_static("red");
pub const WHITE: ClassificationTag = ClassificationTag::from_static("white");
pub const YELLOW: ClassificationTag = ClassificationTag::from_static("yellow");

// Inverted console colors
pub const INV_BLACK: ClassificationTag = ClassificationTag::from_static("inv black");
pub const INV_BLUE: ClassificationTag = ClassificationTag::from_static("inv blue");
pub const INV_CYAN: ClassificationTag = ClassificationTag::from_static("inv cyan");
pub const INV_DARK_BLUE: ClassificationTag = ClassificationTag::from_static("inv dark blue");
pub const INV_DARK_CYAN: ClassificationTag = ClassificationTag::from_static("inv dark cyan");
pub const INV_DARK_GRAY: ClassificationTag = ClassificationTag::from_static("inv dark gray");
pub const INV_DARK_GREEN: ClassificationTag = ClassificationTag::from_static("inv dark green");
pub const INV_DARK_MAGENTA: ClassificationTag = ClassificationTag::from_static("inv dark magenta");
pub const INV_DARK_RED: ClassificationTag = ClassificationTag::from_static("inv dark red");
pub const INV_DARK_YELLOW: ClassificationTag = ClassificationTag::from_static("inv dark yellow");
pub const INV_GRAY: ClassificationTag = ClassificationTag::from_static("inv gray");
pub const INV_GREEN: ClassificationTag = ClassificationTag::from_static("inv green");
pub const INV_MAGENTA: ClassificationTag = ClassificationTag::from_static("inv magenta");
pub const INV_RED: ClassificationTag = ClassificationTag::from_static("inv red");
pub const INV_WHITE: ClassificationTag = ClassificationTag::from_static("inv white");
pub const INV_YELLOW: ClassificationTag = ClassificationTag::from_static("inv yellow");

// Debugger log
pub const DEBUG_LOG_EXCEPTION_HANDLED: ClassificationTag =
    ClassificationTag::from_static("debug log exception handled");
pub const DEBUG_LOG_EXCEPTION_UNHANDLED: ClassificationTag =
    ClassificationTag::from_static("debug log exception unhandled");
pub const DEBUG_LOG_STEP_FILTERING: ClassificationTag =
    ClassificationTag::from_static("debug log step filtering");
pub const DEBUG_LOG_LOAD_MODULE: ClassificationTag =
    ClassificationTag::from_static("debug log load module");
pub const DEBUG_LOG_UNLOAD_MODULE: ClassificationTag =
    ClassificationTag::from_static("debug log unload module");
pub const DEBUG_LOG_EXIT_PROCESS: ClassificationTag =
    ClassificationTag::from_static("debug log exit process");
pub const DEBUG_LOG_EXIT_THREAD: ClassificationTag =
    ClassificationTag::from_static("debug log exit thread");
pub const DEBUG_LOG_PROGRAM_OUTPUT: ClassificationTag =
    ClassificationTag::from_static("debug log program output");
pub const DEBUG_LOG_MDA: ClassificationTag = ClassificationTag::from_static("debug log mda");
pub const DEBUG_LOG_TIMESTAMP: ClassificationTag =
    ClassificationTag::from_static("debug log timestamp");

// Editor chrome
pub const LINE_NUMBER: ClassificationTag = ClassificationTag::from_static("line number");
pub const REPL_LINE_NUMBER_INPUT_1: ClassificationTag =
    ClassificationTag::from_static("repl line number input 1");
pub const REPL_LINE_NUMBER_INPUT_2: ClassificationTag =
    ClassificationTag::from_static("repl line number input 2");
pub const REPL_LINE_NUMBER_OUTPUT: ClassificationTag =
    ClassificationTag::from_static("repl line number output");
pub const VISIBLE_WHITESPACE: ClassificationTag =
    ClassificationTag::from_static("visible whitespace");
pub const SELECTED_TEXT: ClassificationTag = ClassificationTag::from_static("selected text");
pub const INACTIVE_SELECTED_TEXT: ClassificationTag =
    ClassificationTag::from_static("inactive selected text");
pub const HIGHLIGHTED_REFERENCE: ClassificationTag =
    ClassificationTag::from_static("highlighted reference");
pub const HIGHLIGHTED_WRITTEN_REFERENCE: ClassificationTag =
    ClassificationTag::from_static("highlighted written reference");
pub const HIGHLIGHTED_DEFINITION: ClassificationTag =
    ClassificationTag::from_static("highlighted definition");
pub const CURRENT_STATEMENT: ClassificationTag =
    ClassificationTag::from_static("current statement");
pub const CURRENT_STATEMENT_MARKER: ClassificationTag =
    ClassificationTag::from_static("current statement marker");
pub const CALL_RETURN: ClassificationTag = ClassificationTag::from_static("call return");
pub const CALL_RETURN_MARKER: ClassificationTag =
    ClassificationTag::from_static("call return marker");
pub const ACTIVE_STATEMENT_MARKER: ClassificationTag =
    ClassificationTag::from_static("active statement marker");
pub const BREAKPOINT_STATEMENT: ClassificationTag =
    ClassificationTag::from_static("breakpoint statement");
pub const BREAKPOINT_STATEMENT_MARKER: ClassificationTag =
    ClassificationTag::from_static("breakpoint statement marker");
pub const SELECTED_BREAKPOINT_STATEMENT_MARKER: ClassificationTag =
    ClassificationTag::from_static("selected breakpoint statement marker");
pub const DISABLED_BREAKPOINT_STATEMENT_MARKER: ClassificationTag =
    ClassificationTag::from_static("disabled breakpoint statement marker");
pub const CURRENT_LINE: ClassificationTag = ClassificationTag::from_static("current line");
pub const CURRENT_LINE_NO_FOCUS: ClassificationTag =
    ClassificationTag::from_static("current line no focus");

// Hex editor
pub const HEX_TEXT: ClassificationTag = ClassificationTag::from_static("hex text");
pub const HEX_OFFSET: ClassificationTag = ClassificationTag::from_static("hex offset");
pub const HEX_BYTE_0: ClassificationTag = ClassificationTag::from_static("hex byte 0");
pub const HEX_BYTE_1: ClassificationTag = ClassificationTag::from_static("hex byte 1");
pub const HEX_BYTE_ERROR: ClassificationTag = ClassificationTag::from_static("hex byte error");
pub const HEX_ASCII: ClassificationTag = ClassificationTag::from_static("hex ascii");
pub const HEX_CARET: ClassificationTag = ClassificationTag::from_static("hex caret");
pub const HEX_INACTIVE_CARET: ClassificationTag =
    ClassificationTag::from_static("hex inactive caret");
pub const HEX_SELECTION: ClassificationTag = ClassificationTag::from_static("hex selection");
pub const GLYPH_MARGIN: ClassificationTag = ClassificationTag::from_static("glyph margin");
pub const BRACE_MATCHING: ClassificationTag = ClassificationTag::from_static("brace matching");
pub const LINE_SEPARATOR: ClassificationTag = ClassificationTag::from_static("line separator");
pub const FIND_MATCH_HIGHLIGHT_MARKER: ClassificationTag =
    ClassificationTag::from_static("find match highlight marker");

// Block structure guides
pub const BLOCK_STRUCTURE_NAMESPACE: ClassificationTag =
    ClassificationTag::from_static("block structure namespace");
pub const BLOCK_STRUCTURE_TYPE: ClassificationTag =
    ClassificationTag::from_static("block structure type");
pub const BLOCK_STRUCTURE_MODULE: ClassificationTag =
    ClassificationTag::from_static("block structure module");
pub const BLOCK_STRUCTURE_VALUE_TYPE: ClassificationTag =
    ClassificationTag::from_static("block structure value type");
pub const BLOCK_STRUCTURE_INTERFACE: ClassificationTag =
    ClassificationTag::from_static("block structure interface");
pub const BLOCK_STRUCTURE_METHOD: ClassificationTag =
    ClassificationTag::from_static("block structure method");
pub const BLOCK_STRUCTURE_ACCESSOR: ClassificationTag =
    ClassificationTag::from_static("block structure accessor");
pub const BLOCK_STRUCTURE_ANONYMOUS_METHOD: ClassificationTag =
    ClassificationTag::from_static("block structure anonymous method");
pub const BLOCK_STRUCTURE_CONSTRUCTOR: ClassificationTag =
    ClassificationTag::from_static("block structure constructor");
pub const BLOCK_STRUCTURE_DESTRUCTOR: ClassificationTag =
    ClassificationTag::from_static("block structure destructor");
pub const BLOCK_STRUCTURE_OPERATOR: ClassificationTag =
    ClassificationTag::from_static("block structure operator");
pub const BLOCK_STRUCTURE_CONDITIONAL: ClassificationTag =
    ClassificationTag::from_static("block structure conditional");
pub const BLOCK_STRUCTURE_LOOP: ClassificationTag =
    ClassificationTag::from_static("block structure loop");
pub const BLOCK_STRUCTURE_PROPERTY: ClassificationTag =
    ClassificationTag::from_static("block structure property");
pub const BLOCK_STRUCTURE_EVENT: ClassificationTag =
    ClassificationTag::from_static("block structure event");
pub const BLOCK_STRUCTURE_TRY: ClassificationTag =
    ClassificationTag::from_static("block structure try");
pub const BLOCK_STRUCTURE_CATCH: ClassificationTag =
    ClassificationTag::from_static("block structure catch");
pub const BLOCK_STRUCTURE_FILTER: ClassificationTag =
    ClassificationTag::from_static("block structure filter");
pub const BLOCK_STRUCTURE_FINALLY: ClassificationTag =
    ClassificationTag::from_static("block structure finally");
pub const BLOCK_STRUCTURE_FAULT: ClassificationTag =
    ClassificationTag::from_static("block structure fault");
pub const BLOCK_STRUCTURE_LOCK: ClassificationTag =
    ClassificationTag::from_static("block structure lock");
pub const BLOCK_STRUCTURE_USING: ClassificationTag =
    ClassificationTag::from_static("block structure using");
pub const BLOCK_STRUCTURE_FIXED: ClassificationTag =
    ClassificationTag::from_static("block structure fixed");
pub const BLOCK_STRUCTURE_SWITCH: ClassificationTag =
    ClassificationTag::from_static("block structure switch");
pub const BLOCK_STRUCTURE_CASE: ClassificationTag =
    ClassificationTag::from_static("block structure case");
pub const BLOCK_STRUCTURE_LOCAL_FUNCTION: ClassificationTag =
    ClassificationTag::from_static("block structure local function");
pub const BLOCK_STRUCTURE_OTHER: ClassificationTag =
    ClassificationTag::from_static("block structure other");
pub const BLOCK_STRUCTURE_XML: ClassificationTag =
    ClassificationTag::from_static("block structure xml");
pub const BLOCK_STRUCTURE_XAML: ClassificationTag =
    ClassificationTag::from_static("block structure xaml");

// Completion and signature help
pub const COMPLETION_MATCH_HIGHLIGHT: ClassificationTag =
    ClassificationTag::from_static("completion match highlight");
pub const COMPLETION_SUFFIX: ClassificationTag =
    ClassificationTag::from_static("completion suffix");
pub const SIGNATURE_HELP_DOCUMENTATION: ClassificationTag =
    ClassificationTag::from_static("sighelp-documentation");
pub const SIGNATURE_HELP_CURRENT_PARAMETER: ClassificationTag =
    ClassificationTag::from_static("currentParam");
pub const SIGNATURE_HELP_PARAMETER: ClassificationTag =
    ClassificationTag::from_static("signature help parameter");
pub const SIGNATURE_HELP_PARAMETER_DOCUMENTATION: ClassificationTag =
    ClassificationTag::from_static("signature help parameter documentation");

// Misc
pub const URL: ClassificationTag = ClassificationTag::from_static("url");

// Hex editor: PE and metadata structures
pub const HEX_PE_DOS_HEADER: ClassificationTag =
    ClassificationTag::from_static("hex pe dos header");
pub const HEX_PE_FILE_HEADER: ClassificationTag =
    ClassificationTag::from_static("hex pe file header");
pub const HEX_PE_OPTIONAL_HEADER_32: ClassificationTag =
    ClassificationTag::from_static("hex pe optional header 32");
pub const HEX_PE_OPTIONAL_HEADER_64: ClassificationTag =
    ClassificationTag::from_static("hex pe optional header 64");
pub const HEX_PE_SECTION: ClassificationTag = ClassificationTag::from_static("hex pe section");
pub const HEX_PE_SECTION_NAME: ClassificationTag =
    ClassificationTag::from_static("hex pe section name");
pub const HEX_COR_20_HEADER: ClassificationTag =
    ClassificationTag::from_static("hex cor 20 header");
pub const HEX_STORAGE_SIGNATURE: ClassificationTag =
    ClassificationTag::from_static("hex storage signature");
pub const HEX_STORAGE_HEADER: ClassificationTag =
    ClassificationTag::from_static("hex storage header");
pub const HEX_STORAGE_STREAM: ClassificationTag =
    ClassificationTag::from_static("hex storage stream");
pub const HEX_STORAGE_STREAM_NAME: ClassificationTag =
    ClassificationTag::from_static("hex storage stream name");
pub const HEX_STORAGE_STREAM_NAME_INVALID: ClassificationTag =
    ClassificationTag::from_static("hex storage stream name invalid");
pub const HEX_TABLES_STREAM: ClassificationTag =
    ClassificationTag::from_static("hex tables stream");
pub const HEX_TABLE_NAME: ClassificationTag = ClassificationTag::from_static("hex table name");

// Search highlights
pub const DOCUMENT_LIST_MATCH_HIGHLIGHT: ClassificationTag =
    ClassificationTag::from_static("document list match highlight");
pub const GAC_MATCH_HIGHLIGHT: ClassificationTag =
    ClassificationTag::from_static("gac match highlight");
pub const APP_SETTINGS_TREE_VIEW_NODE_MATCH_HIGHLIGHT: ClassificationTag =
    ClassificationTag::from_static("app settings tree view node match highlight");
pub const APP_SETTINGS_TEXT_MATCH_HIGHLIGHT: ClassificationTag =
    ClassificationTag::from_static("app settings text match highlight");

// Hex editor chrome
pub const HEX_CURRENT_LINE: ClassificationTag = ClassificationTag::from_static("hex current line");
pub const HEX_CURRENT_LINE_NO_FOCUS: ClassificationTag =
    ClassificationTag::from_static("hex current line no focus");
pub const HEX_INACTIVE_SELECTED_TEXT: ClassificationTag =
    ClassificationTag::from_static("hex inactive selected text");
pub const HEX_COLUMN_LINE_0: ClassificationTag =
    ClassificationTag::from_static("hex column line 0");
pub const HEX_COLUMN_LINE_1: ClassificationTag =
    ClassificationTag::from_static("hex column line 1");
pub const HEX_COLUMN_LINE_GROUP_0: ClassificationTag =
    ClassificationTag::from_static("hex column line group 0");
pub const HEX_COLUMN_LINE_GROUP_1: ClassificationTag =
    ClassificationTag::from_static("hex column line group 1");
pub const HEX_HIGHLIGHTED_VALUES_COLUMN: ClassificationTag =
    ClassificationTag::from_static("hex highlighted values column");
pub const HEX_HIGHLIGHTED_ASCII_COLUMN: ClassificationTag =
    ClassificationTag::from_static("hex highlighted ascii column");
pub const HEX_GLYPH_MARGIN: ClassificationTag = ClassificationTag::from_static("hex glyph margin");
pub const HEX_CURRENT_VALUE_CELL: ClassificationTag =
    ClassificationTag::from_static("hex current value cell");
pub const HEX_CURRENT_ASCII_CELL: ClassificationTag =
    ClassificationTag::from_static("hex current ascii cell");

/// Every tag in the vocabulary, in declaration order.
pub const ALL: &[ClassificationTag] = &[
    IDENTIFIER,
    LITERAL,
    TEXT,
    OPERATOR,
    PUNCTUATION,
    NUMBER,
    COMMENT,
    KEYWORD,
    STRING,
    VERBATIM_STRING,
    CHAR,
    NAMESPACE,
    TYPE,
    SEALED_TYPE,
    STATIC_TYPE,
    DELEGATE,
    ENUM,
    INTERFACE,
    VALUE_TYPE,
    MODULE,
    TYPE_GENERIC_PARAMETER,
    METHOD_GENERIC_PARAMETER,
    INSTANCE_METHOD,
    STATIC_METHOD,
    EXTENSION_METHOD,
    INSTANCE_FIELD,
    ENUM_FIELD,
    LITERAL_FIELD,
    STATIC_FIELD,
    INSTANCE_EVENT,
    STATIC_EVENT,
    INSTANCE_PROPERTY,
    STATIC_PROPERTY,
    LOCAL,
    PARAMETER,
    PREPROCESSOR_KEYWORD,
    PREPROCESSOR_TEXT,
    LABEL,
    OP_CODE,
    IL_DIRECTIVE,
    IL_MODULE,
    EXCLUDED_CODE,
    XML_DOC_COMMENT_ATTRIBUTE_NAME,
    XML_DOC_COMMENT_ATTRIBUTE_QUOTES,
    XML_DOC_COMMENT_ATTRIBUTE_VALUE,
    XML_DOC_COMMENT_CDATA_SECTION,
    XML_DOC_COMMENT_COMMENT,
    XML_DOC_COMMENT_DELIMITER,
    XML_DOC_COMMENT_ENTITY_REFERENCE,
    XML_DOC_COMMENT_NAME,
    XML_DOC_COMMENT_PROCESSING_INSTRUCTION,
    XML_DOC_COMMENT_TEXT,
    XML_LITERAL_ATTRIBUTE_NAME,
    XML_LITERAL_ATTRIBUTE_QUOTES,
    XML_LITERAL_ATTRIBUTE_VALUE,
    XML_LITERAL_CDATA_SECTION,
    XML_LITERAL_COMMENT,
    XML_LITERAL_DELIMITER,
    XML_LITERAL_EMBEDDED_EXPRESSION,
    XML_LITERAL_ENTITY_REFERENCE,
    XML_LITERAL_NAME,
    XML_LITERAL_PROCESSING_INSTRUCTION,
    XML_LITERAL_TEXT,
    XML_ATTRIBUTE,
    XML_ATTRIBUTE_QUOTES,
    XML_ATTRIBUTE_VALUE,
    XML_CDATA_SECTION,
    XML_COMMENT,
    XML_DELIMITER,
    XML_KEYWORD,
    XML_NAME,
    XML_PROCESSING_INSTRUCTION,
    XML_TEXT,
    XAML_ATTRIBUTE,
    XAML_ATTRIBUTE_QUOTES,
    XAML_ATTRIBUTE_VALUE,
    XAML_CDATA_SECTION,
    XAML_COMMENT,
    XAML_DELIMITER,
    XAML_KEYWORD,
    XAML_MARKUP_EXTENSION_CLASS,
    XAML_MARKUP_EXTENSION_PARAMETER_NAME,
    XAML_MARKUP_EXTENSION_PARAMETER_VALUE,
    XAML_NAME,
    XAML_PROCESSING_INSTRUCTION,
    XAML_TEXT,
    XML_DOC_TOOL_TIP_HEADER,
    ASSEMBLY,
    ASSEMBLY_EXE,
    ASSEMBLY_MODULE,
    DIRECTORY_PART,
    FILE_NAME_NO_EXTENSION,
    FILE_EXTENSION,
    ERROR,
    TO_STRING_EVAL,
    REPL_PROMPT_1,
    REPL_PROMPT_2,
    REPL_OUTPUT_TEXT,
    REPL_SCRIPT_OUTPUT_TEXT,
    BLACK,
    BLUE,
    CYAN,
    DARK_BLUE,
    DARK_CYAN,
    DARK_GRAY,
    DARK_GREEN,
    DARK_MAGENTA,
    DARK_RED,
    DARK_YELLOW,
    GRAY,
    GREEN,
    MAGENTA,
    RED,
    WHITE,
    YELLOW,
    INV_BLACK,
    INV_BLUE,
    INV_CYAN,
    INV_DARK_BLUE,
    INV_DARK_CYAN,
    INV_DARK_GRAY,
    INV_DARK_GREEN,
    INV_DARK_MAGENTA,
    INV_DARK_RED,
    INV_DARK_YELLOW,
    INV_GRAY,
    INV_GREEN,
    INV_MAGENTA,
    INV_RED,
    INV_WHITE,
    INV_YELLOW,
    DEBUG_LOG_EXCEPTION_HANDLED,
    DEBUG_LOG_EXCEPTION_UNHANDLED,
    DEBUG_LOG_STEP_FILTERING,
    DEBUG_LOG_LOAD_MODULE,
    DEBUG_LOG_UNLOAD_MODULE,
    DEBUG_LOG_EXIT_PROCESS,
    DEBUG_LOG_EXIT_THREAD,
    DEBUG_LOG_PROGRAM_OUTPUT,
    DEBUG_LOG_MDA,
    DEBUG_LOG_TIMESTAMP,
    LINE_NUMBER,
    REPL_LINE_NUMBER_INPUT_1,
    REPL_LINE_NUMBER_INPUT_2,
    REPL_LINE_NUMBER_OUTPUT,
    VISIBLE_WHITESPACE,
    SELECTED_TEXT,
    INACTIVE_SELECTED_TEXT,
    HIGHLIGHTED_REFERENCE,
    HIGHLIGHTED_WRITTEN_REFERENCE,
    HIGHLIGHTED_DEFINITION,
    CURRENT_STATEMENT,
    CURRENT_STATEMENT_MARKER,
    CALL_RETURN,
    CALL_RETURN_MARKER,
    ACTIVE_STATEMENT_MARKER,
    BREAKPOINT_STATEMENT,
    BREAKPOINT_STATEMENT_MARKER,
    SELECTED_BREAKPOINT_STATEMENT_MARKER,
    DISABLED_BREAKPOINT_STATEMENT_MARKER,
    CURRENT_LINE,
    CURRENT_LINE_NO_FOCUS,
    HEX_TEXT,
    HEX_OFFSET,
    HEX_BYTE_0,
    HEX_BYTE_1,
    HEX_BYTE_ERROR,
    HEX_ASCII,
    HEX_CARET,
    HEX_INACTIVE_CARET,
    HEX_SELECTION,
    GLYPH_MARGIN,
    BRACE_MATCHING,
    LINE_SEPARATOR,
    FIND_MATCH_HIGHLIGHT_MARKER,
    BLOCK_STRUCTURE_NAMESPACE,
    BLOCK_STRUCTURE_TYPE,
    BLOCK_STRUCTURE_MODULE,
    BLOCK_STRUCTURE_VALUE_TYPE,
    BLOCK_STRUCTURE_INTERFACE,
    BLOCK_STRUCTURE_METHOD,
    BLOCK_STRUCTURE_ACCESSOR,
    BLOCK_STRUCTURE_ANONYMOUS_METHOD,
    BLOCK_STRUCTURE_CONSTRUCTOR,
    BLOCK_STRUCTURE_DESTRUCTOR,
    BLOCK_STRUCTURE_OPERATOR,
    BLOCK_STRUCTURE_CONDITIONAL,
    BLOCK_STRUCTURE_LOOP,
    BLOCK_STRUCTURE_PROPERTY,
    BLOCK_STRUCTURE_EVENT,
    BLOCK_STRUCTURE_TRY,
    BLOCK_STRUCTURE_CATCH,
    BLOCK_STRUCTURE_FILTER,
    BLOCK_STRUCTURE_FINALLY,
    BLOCK_STRUCTURE_FAULT,
    BLOCK_STRUCTURE_LOCK,
    BLOCK_STRUCTURE_USING,
    BLOCK_STRUCTURE_FIXED,
    BLOCK_STRUCTURE_SWITCH,
    BLOCK_STRUCTURE_CASE,
    BLOCK_STRUCTURE_LOCAL_FUNCTION,
    BLOCK_STRUCTURE_OTHER,
    BLOCK_STRUCTURE_XML,
    BLOCK_STRUCTURE_XAML,
    COMPLETION_MATCH_HIGHLIGHT,
    COMPLETION_SUFFIX,
    SIGNATURE_HELP_DOCUMENTATION,
    SIGNATURE_HELP_CURRENT_PARAMETER,
    SIGNATURE_HELP_PARAMETER,
    SIGNATURE_HELP_PARAMETER_DOCUMENTATION,
    URL,
    HEX_PE_DOS_HEADER,
    HEX_PE_FILE_HEADER,
    HEX_PE_OPTIONAL_HEADER_32,
    HEX_PE_OPTIONAL_HEADER_64,
    HEX_PE_SECTION,
    HEX_PE_SECTION_NAME,
    HEX_COR_20_HEADER,
    HEX_STORAGE_SIGNATURE,
    HEX_STORAGE_HEADER,
    HEX_STORAGE_STREAM,
    HEX_STORAGE_STREAM_NAME,
    HEX_STORAGE_STREAM_NAME_INVALID,
    HEX_TABLES_STREAM,
    HEX_TABLE_NAME,
    DOCUMENT_LIST_MATCH_HIGHLIGHT,
    GAC_MATCH_HIGHLIGHT,
    APP_SETTINGS_TREE_VIEW_NODE_MATCH_HIGHLIGHT,
    APP_SETTINGS_TEXT_MATCH_HIGHLIGHT,
    HEX_CURRENT_LINE,
    HEX_CURRENT_LINE_NO_FOCUS,
    HEX_INACTIVE_SELECTED_TEXT,
    HEX_COLUMN_LINE_0,
    HEX_COLUMN_LINE_1,
    HEX_COLUMN_LINE_GROUP_0,
    HEX_COLUMN_LINE_GROUP_1,
    HEX_HIGHLIGHTED_VALUES_COLUMN,
    HEX_HIGHLIGHTED_ASCII_COLUMN,
    HEX_GLYPH_MARGIN,
    HEX_CURRENT_VALUE_CELL,
    HEX_CURRENT_ASCII_CELL,
];

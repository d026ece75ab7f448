//! Declarative documentation table for the .NET native hosting API.
//!
//! Entries are grouped by the header that declares them and appear in the
//! order the headers declare them. Text uses the XML doc-comment markup the
//! downstream generator understands (`<c>`, `<see/>`, `<para>`, ...).

/// One hand-authored record, before it becomes an [`ApiDetails`](crate::ApiDetails).
pub(super) struct ApiDecl {
    pub id: &'static str,
    pub help_link: &'static str,
    pub description: Option<&'static str>,
    pub remarks: Option<&'static str>,
    pub return_value: Option<&'static str>,
    pub fields: &'static [(&'static str, &'static str)],
    pub parameters: &'static [(&'static str, &'static str)],
}

macro_rules! corehost {
    ($path:literal) => {
        concat!(
            "https://github.com/dotnet/runtime/blob/release/10.0/src/native/corehost/",
            $path
        )
    };
}

macro_rules! property_buffer_lifetime {
    () => {
        "<para>The buffer pointed to by value is owned by the host context. The lifetime of the buffer is only\n\
         guaranteed until any of the below occur:\n\
         <list type=\"bullet\">\n\
         <item>a '<c>run</c>' method is called for the host context</item>\n\
         <item>properties are changed via <c>hostfxr_set_runtime_property_value</c></item>\n\
         <item>the host context is closed via '<c>hostfxr_close</c>'</item>\n\
         </list></para>\n"
    };
}

const RESERVED_ZERO: &str = "Extensibility parameter (currently unused and must be <c>0</c>)";
const ASSEMBLY_PATH: &str = "Fully qualified path to assembly";
const TYPE_NAME: &str = "Assembly qualified type name";
const METHOD_NAME: &str = "Public static method name compatible with delegateType";
const DELEGATE_TYPE_NAME: &str = "Assembly qualified delegate type name or <see langword=\"null\"/>\n\
    or <c>UNMANAGEDCALLERSONLY_METHOD</c> if the method is marked with\n\
    the <see cref=\"System.Runtime.InteropServices.UnmanagedCallersOnlyAttribute\"/>.";
const DELEGATE_OUT: &str = "Pointer where to store the function pointer result";
const HOST_CONTEXT_HANDLE: &str = "Handle to the initialized host context";
const INIT_PARAMETERS: &str = "Optional. Additional parameters for initialization";
const INIT_CONTEXT_OUT: &str =
    "On success, this will be populated with an opaque value representing the initialized host context";
const ERROR_CODE_RESULT: &str = "The error code result.";
const ZERO_ON_SUCCESS: &str = "<c>0</c> on success, otherwise failure.";
const STRING_ENCODING: &str = "String encoding:<br/>\n\
    <c>Windows</c>     - UTF-16 (pal::char_t is 2 byte wchar_t)<br/>\n\
    <c>Non-Windows</c> - UTF-8  (pal::char_t is 1 byte char)";

pub(super) const HOSTING_API: &[ApiDecl] = &[
    // nethost.h
    ApiDecl {
        id: "get_hostfxr_parameters",
        help_link: corehost!("nethost/nethost.h#L44-L64"),
        description: Some("Parameters for <c>get_hostfxr_path</c>"),
        remarks: None,
        return_value: None,
        fields: &[
            ("size", "Size of the struct. This is used for versioning."),
            (
                "assembly_path",
                "Path to the component's assembly.\n\
                 If specified, <c>hostfxr</c> is located as if the <see cref=\"assembly_path\"/> is the <c>apphost</c>",
            ),
            (
                "dotnet_root",
                "Path to directory containing the dotnet executable.\n\
                 If specified, <c>hostfxr</c> is located as if an application is started using\n\
                 '<c>dotnet app.dll</c>', which means it will be searched for under the <c>dotnet_root</c>\n\
                 path and the <see cref=\"assembly_path\"/> is ignored.",
            ),
        ],
        parameters: &[],
    },
    ApiDecl {
        id: "get_hostfxr_path",
        help_link: corehost!("nethost/nethost.h#L66-L94"),
        description: Some("Get the path to the <c>hostfxr</c> library"),
        remarks: Some(
            "The full search for the <c>hostfxr</c> library is done on every call. To minimize the need\n\
             to call this function multiple times, pass a large buffer (e.g. <c>PATH_MAX</c>).",
        ),
        return_value: Some(
            "<c>0</c> on success, otherwise failure<br/>\n\
             <c>0x80008098</c> - <paramref name=\"buffer\"/> is too small (<c>HostApiBufferTooSmall</c>)",
        ),
        fields: &[],
        parameters: &[
            (
                "buffer",
                "Buffer that will be populated with the <c>hostfxr</c> path, including a null terminator.",
            ),
            (
                "buffer_size",
                "[<see langword=\"in\"/>] Size of <paramref name=\"buffer\"/> in <see langword=\"char_t\"/> units.<br/>\n\
                 [<see langword=\"out\"/>] Size of <paramref name=\"buffer\"/> used in <see langword=\"char_t\"/> units. If the input value is too small\n\
                 or <paramref name=\"buffer\"/> is <see langword=\"nullptr\"/>, this is populated with the minimum required size\n\
                 in <see langword=\"char_t\"/> units for a buffer to hold the <c>hostfxr</c> path",
            ),
            (
                "get_hostfxr_parameters",
                "Optional. Parameters that modify the behaviour for locating the <c>hostfxr</c> library.\n\
                 If <see langword=\"nullptr\"/>, <c>hostfxr</c> is located using the environment variable or global registration",
            ),
        ],
    },
    // coreclr_delegates.h
    ApiDecl {
        id: "load_assembly_and_get_function_pointer_fn",
        help_link: corehost!("coreclr_delegates.h#L29-L38"),
        description: Some(
            "Signature of delegate returned by <see cref=\"coreclr_delegate_type::hdt_load_assembly_and_get_function_pointer\"/>",
        ),
        remarks: None,
        return_value: None,
        fields: &[],
        parameters: &[
            ("assembly_path", ASSEMBLY_PATH),
            ("type_name", TYPE_NAME),
            ("method_name", METHOD_NAME),
            ("delegate_type_name", DELEGATE_TYPE_NAME),
            ("reserved", RESERVED_ZERO),
            ("delegate", DELEGATE_OUT),
        ],
    },
    ApiDecl {
        id: "component_entry_point_fn",
        help_link: corehost!("coreclr_delegates.h#L40-L41"),
        description: Some(
            "Signature of delegate returned by <see cref=\"load_assembly_and_get_function_pointer_fn\"/> when <c>delegate_type_name == null</c> (<see langword=\"default\"/>)",
        ),
        remarks: None,
        return_value: None,
        fields: &[],
        parameters: &[],
    },
    ApiDecl {
        id: "get_function_pointer_fn",
        help_link: corehost!("coreclr_delegates.h#L43-L51"),
        description: None,
        remarks: None,
        return_value: None,
        fields: &[],
        parameters: &[
            ("type_name", TYPE_NAME),
            ("method_name", METHOD_NAME),
            ("delegate_type_name", DELEGATE_TYPE_NAME),
            ("load_context", RESERVED_ZERO),
            ("reserved", RESERVED_ZERO),
            ("delegate", DELEGATE_OUT),
        ],
    },
    ApiDecl {
        id: "load_assembly_fn",
        help_link: corehost!("coreclr_delegates.h#L53-L56"),
        description: None,
        remarks: None,
        return_value: None,
        fields: &[],
        parameters: &[
            ("assembly_path", ASSEMBLY_PATH),
            ("load_context", RESERVED_ZERO),
            ("reserved", RESERVED_ZERO),
        ],
    },
    ApiDecl {
        id: "load_assembly_bytes_fn",
        help_link: corehost!("coreclr_delegates.h#L58-L64"),
        description: None,
        remarks: None,
        return_value: None,
        fields: &[],
        parameters: &[
            ("assembly_bytes", "Bytes of the assembly to load"),
            ("assembly_bytes_len", "Byte length of the assembly to load"),
            ("symbols_bytes", "Optional. Bytes of the symbols for the assembly"),
            (
                "symbols_bytes_len",
                "Optional. Byte length of the symbols for the assembly",
            ),
            ("load_context", RESERVED_ZERO),
            ("reserved", RESERVED_ZERO),
        ],
    },
    // hostfxr.h
    ApiDecl {
        id: "hostfxr_set_error_writer_fn",
        help_link: corehost!("hostfxr.h#L57-L80"),
        description: Some("Sets a callback which is to be used to write errors to."),
        remarks: Some(
            "<para>The error writer is registered per-thread, so the registration is thread-local. On each thread\n\
             only one callback can be registered. Subsequent registrations overwrite the previous ones.</para>\n\
             <para>By default no callback is registered in which case the errors are written to stderr.</para>\n\
             <para>Each call to the error writer is sort of like writing a single line (the EOL character is omitted).\n\
             Multiple calls to the error writer may occur for one failure.</para>\n\
             <para>If the <c>hostfxr</c> invokes functions in <c>hostpolicy</c> as part of its operation, the error writer\n\
             will be propagated to hostpolicy for the duration of the call. This means that errors from\n\
             both <c>hostfxr</c> and <c>hostpolicy</c> will be reporter through the same error writer.</para>",
        ),
        return_value: Some(
            "The previously registered callback (which is now unregistered), or <see langword=\"nullptr\"/> if no previous callback\n\
             was registered",
        ),
        fields: &[],
        parameters: &[(
            "error_writer",
            "A callback function which will be invoked every time an error is to be reported.\n\
             Or <see langword=\"nullptr\"/> to unregister previously registered callback and return to the default behavior.",
        )],
    },
    ApiDecl {
        id: "hostfxr_initialize_for_dotnet_command_line_fn",
        help_link: corehost!("hostfxr.h#L90-L121"),
        description: Some(
            "Initializes the hosting components for a dotnet command line running an application",
        ),
        remarks: Some(
            "<para>This function parses the specified command-line arguments to determine the application to run. It will\n\
             then find the corresponding .runtimeconfig.json and .deps.json with which to resolve frameworks and\n\
             dependencies and prepare everything needed to load the runtime.</para>\n\
             <para>This function only supports arguments for running an application. It does not support SDK commands.</para>\n\
             <para>This function does not load the runtime.</para>",
        ),
        return_value: Some(
            "<c>Success</c>          - Hosting components were successfully initialized<br/>\n\
             <c>HostInvalidState</c> - Hosting components are already initialized",
        ),
        fields: &[],
        parameters: &[
            ("argc", "Number of argv arguments"),
            (
                "argv",
                "Command-line arguments for running an application (as if through the dotnet executable).\n\
                 Only command-line arguments which are accepted by runtime installation are supported, SDK/CLI commands are not supported.\n\
                 For example <c>app.dll app_argument_1 app_argument_2</c>.",
            ),
            ("parameters", INIT_PARAMETERS),
            ("host_context_handle", INIT_CONTEXT_OUT),
        ],
    },
    ApiDecl {
        id: "hostfxr_initialize_for_runtime_config_fn",
        help_link: corehost!("hostfxr.h#L123-L156"),
        description: Some(
            "Initializes the hosting components using a <c>.runtimeconfig.json</c> file",
        ),
        remarks: Some(
            "<para>This function will process the <c>.runtimeconfig.json</c> to resolve frameworks and prepare everything needed\n\
             to load the runtime. It will only process the <c>.deps.json</c> from frameworks (not any app/component that\n\
             may be next to the <c>.runtimeconfig.json</c>).</para>\n\
             <para>This function does not load the runtime.</para>\n\
             <para>If called when the runtime has already been loaded, this function will check if the specified runtime\n\
             config is compatible with the existing runtime.</para>\n\
             <para>Both <c>Success_HostAlreadyInitialized</c> and <c>Success_DifferentRuntimeProperties</c> codes are considered successful\n\
             initializations. In the case of <c>Success_DifferentRuntimeProperties</c>, it is left to the consumer to verify that\n\
             the difference in properties is acceptable.</para>",
        ),
        return_value: Some(
            "<c>Success</c>                            - Hosting components were successfully initialized<br/>\n\
             <c>Success_HostAlreadyInitialized</c>     - Config is compatible with already initialized hosting components<br/>\n\
             <c>Success_DifferentRuntimeProperties</c> - Config has runtime properties that differ from already initialized hosting components<br/>\n\
             <c>HostIncompatibleConfig</c>             - Config is incompatible with already initialized hosting components",
        ),
        fields: &[],
        parameters: &[
            (
                "runtime_config_path",
                "Path to the <c>.runtimeconfig.json</c> file",
            ),
            ("parameters", INIT_PARAMETERS),
            ("host_context_handle", INIT_CONTEXT_OUT),
        ],
    },
    ApiDecl {
        id: "hostfxr_get_runtime_property_value_fn",
        help_link: corehost!("hostfxr.h#L158-L184"),
        description: Some("Gets the runtime property value for an initialized host context"),
        remarks: Some(concat!(
            property_buffer_lifetime!(),
            "<para>If <paramref name=\"host_context_handle\"/> is nullptr and an active host context exists, this function will get the\n\
             property value for the active host context.</para>"
        )),
        return_value: Some(ERROR_CODE_RESULT),
        fields: &[],
        parameters: &[
            ("host_context_handle", HOST_CONTEXT_HANDLE),
            ("name", "Runtime property name"),
            (
                "value",
                "Out parameter. Pointer to a buffer with the property value.",
            ),
        ],
    },
    ApiDecl {
        id: "hostfxr_set_runtime_property_value_fn",
        help_link: corehost!("hostfxr.h#L186-L208"),
        description: Some("Sets the value of a runtime property for an initialized host context"),
        remarks: Some(
            "<para>Setting properties is only supported for the first host context, before the runtime has been loaded.</para>\n\
             <para>If the property already exists in the host context, it will be overwritten. If value is nullptr, the\n\
             property will be removed.</para>",
        ),
        return_value: Some(ERROR_CODE_RESULT),
        fields: &[],
        parameters: &[
            ("host_context_handle", HOST_CONTEXT_HANDLE),
            ("name", "Runtime property name"),
            ("value", "Value to set"),
        ],
    },
    ApiDecl {
        id: "hostfxr_get_runtime_properties_fn",
        help_link: corehost!("hostfxr.h#L210-L241"),
        description: Some("Gets all the runtime properties for an initialized host context"),
        remarks: Some(concat!(
            property_buffer_lifetime!(),
            "<para>If <paramref name=\"host_context_handle\"/> is <see langword=\"nullptr\"/> and an active host context exists, this function will get the\n\
             properties for the active host context.</para>"
        )),
        return_value: Some(ERROR_CODE_RESULT),
        fields: &[],
        parameters: &[
            ("host_context_handle", HOST_CONTEXT_HANDLE),
            (
                "count",
                "[<see langword=\"in\"/>] Size of the keys and values buffers<br/>\n\
                 [<see langword=\"out\"/>] Number of properties returned (size of <paramref name=\"keys\"/>/<paramref name=\"values\"/> buffers used). If the input value is too\n\
                 small or keys/values is <see langword=\"nullptr\"/>, this is populated with the number of available properties",
            ),
            (
                "keys",
                "Array of pointers to buffers with runtime property keys",
            ),
            (
                "values",
                "Array of pointers to buffers with runtime property values",
            ),
        ],
    },
    ApiDecl {
        id: "hostfxr_run_app_fn",
        help_link: corehost!("hostfxr.h#L243-L257"),
        description: Some("Load CoreCLR and run the application for an initialized host context"),
        remarks: Some(
            "<para>The <paramref name=\"host_context_handle\"/> must have been initialized using <c>hostfxr_initialize_for_dotnet_command_line</c>.</para>\n\
             <para>This function will not return until the managed application exits.</para>",
        ),
        return_value: Some(
            "If the app was successfully run, the exit code of the application. Otherwise, the error code result.",
        ),
        fields: &[],
        parameters: &[("host_context_handle", HOST_CONTEXT_HANDLE)],
    },
    ApiDecl {
        id: "hostfxr_get_runtime_delegate_fn",
        help_link: corehost!("hostfxr.h#L259-L283"),
        description: Some(
            "Gets a typed delegate from the currently loaded CoreCLR or from a newly created one.",
        ),
        remarks: Some(
            "If the <paramref name=\"host_context_handle\"/> was initialized using <c>hostfxr_initialize_for_runtime_config</c>,\n\
             then all delegate types are supported.<br/>\n\
             If the <paramref name=\"host_context_handle\"/> was initialized using <c>hostfxr_initialize_for_dotnet_command_line</c>,\n\
             then only the following delegate types are currently supported:<br/>\n    \
             hdt_load_assembly_and_get_function_pointer<br/>\n    \
             hdt_get_function_pointer\n\
             </list>",
        ),
        return_value: Some(ERROR_CODE_RESULT),
        fields: &[],
        parameters: &[
            ("host_context_handle", HOST_CONTEXT_HANDLE),
            ("type", "Type of runtime delegate requested"),
            (
                "delegate",
                "An out parameter that will be assigned the delegate.",
            ),
        ],
    },
    ApiDecl {
        id: "hostfxr_close_fn",
        help_link: corehost!("hostfxr.h#L285-L295"),
        description: Some("Closes an initialized host context"),
        remarks: None,
        return_value: Some(ERROR_CODE_RESULT),
        fields: &[],
        parameters: &[("host_context_handle", HOST_CONTEXT_HANDLE)],
    },
    ApiDecl {
        id: "hostfxr_get_dotnet_environment_info_fn",
        help_link: corehost!("hostfxr.h#L330-L369"),
        description: Some(
            "<para>Returns available SDKs and frameworks.</para>\n\
             <para>Resolves the existing SDKs and frameworks from a dotnet root directory (if\n\
             any), or the global default location. If multi-level lookup is enabled and\n\
             the dotnet root location is different than the global location, the SDKs and\n\
             frameworks will be enumerated from both locations.</para>\n\
             <para>The SDKs are sorted in ascending order by version, multi-level lookup\n\
             locations are put before private ones.</para>\n\
             <para>The frameworks are sorted in ascending order by name followed by version,\n\
             multi-level lookup locations are put before private ones.</para>",
        ),
        remarks: Some(STRING_ENCODING),
        return_value: Some(ZERO_ON_SUCCESS),
        fields: &[],
        parameters: &[
            (
                "dotnet_root",
                "The path to a directory containing a dotnet executable.",
            ),
            ("reserved", "Reserved for future parameters."),
            (
                "result",
                "Callback invoke to return the list of SDKs and frameworks.\n\
                 Structs and their elements are valid for the duration of the call.",
            ),
            (
                "result_context",
                "Additional context passed to the result callback.",
            ),
        ],
    },
    ApiDecl {
        id: "hostfxr_resolve_frameworks_for_runtime_config_fn",
        help_link: corehost!("hostfxr.h#L395-L421"),
        description: Some("Resolves frameworks for a runtime config"),
        remarks: Some(STRING_ENCODING),
        return_value: Some(ZERO_ON_SUCCESS),
        fields: &[],
        parameters: &[
            (
                "runtime_config_path",
                "Path to the <c>.runtimeconfig.json</c> file",
            ),
            (
                "parameters",
                "Optional. Additional parameters for initialization.\n\
                 If <see langword=\"null\"/> or <c>dotnet_root</c> is <see langword=\"null\"/>, the root corresponding to the running <c>hostfx</c> is used.",
            ),
            (
                "callback",
                "Optional. Result callback invoked with result of the resolution.\n\
                 Structs and their elements are valid for the duration of the call.",
            ),
            (
                "result_context",
                "Optional. Additional context passed to the result callback.",
            ),
        ],
    },
];

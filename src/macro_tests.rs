//! Test the script-building macros

#[cfg(test)]
mod tests {
    use crate::*;

    fn setup() -> (Design, BufferPrinter) {
        let buffer = BufferPrinter::new();
        let script = Script::new(buffer.clone());
        let design = script.design("P").create().unwrap();
        buffer.clear();
        (design, buffer)
    }

    #[test]
    fn test_port_macro_forms() {
        let (design, _buffer) = setup();
        let decision = design.module("IF", "Decision").create().unwrap();

        let any = port!(decision);
        assert_eq!(any.name(), None);
        assert_eq!(any.index(), None);

        assert_eq!(port!(decision, name = "C").identifier().unwrap(), "Condition000");
        assert_eq!(port!(decision, index = 1).index(), Some(1));
        assert_eq!(port!(decision, "I", 1).identifier().unwrap(), "I001");
    }

    #[test]
    fn test_params_macro_sets_in_order() {
        let (design, buffer) = setup();
        let value = design.module("CONST", "Value").create().unwrap();
        buffer.clear();

        let set = params!(value.port_named("O"), {
            "Bit Width" => 16,
            "Arithmetic" => "signed",
        })
        .unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set[0].name(), "Bit Width");
        assert_eq!(
            buffer.lines(),
            vec![
                "SetLinkParam \"Process0/Value\" \"O\" \"Bit Width\" \"16\"",
                "SetLinkParam \"Process0/Value\" \"O\" \"Arithmetic\" \"signed\"",
            ]
        );
    }

    #[test]
    fn test_params_macro_stops_at_first_error() {
        let (design, buffer) = setup();
        let split = design.module("SplitComponents", "Split").create().unwrap();
        buffer.clear();

        let result = params!(split, { "Mode" => "a" });
        assert!(result.is_ok());

        let result = params!(split.port_at("O", 4), {
            "Bit Width" => 8,
            "Arithmetic" => "unsigned",
        });
        assert!(matches!(result, Err(ScriptError::PortIndexOutOfRange { .. })));
        assert_eq!(buffer.lines(), vec!["SetModuleParam \"Process0/Split\" \"Mode\" \"a\""]);
    }
}

use super::*;

// =============================================================
// sanitize_source
// =============================================================

#[test]
fn plain_body_passes_through_trimmed() {
    let body = "  ctx.clearRect(0, 0, width, height);\n";
    assert_eq!(sanitize_source(body).as_deref(), Some("ctx.clearRect(0, 0, width, height);"));
}

#[test]
fn javascript_fence_is_stripped() {
    let raw = "```javascript\nctx.beginPath();\nctx.arc(width / 2, height / 2, 40, 0, Math.PI * 2);\n```";
    assert_eq!(
        sanitize_source(raw).as_deref(),
        Some("ctx.beginPath();\nctx.arc(width / 2, height / 2, 40, 0, Math.PI * 2);")
    );
}

#[test]
fn js_and_bare_fences_are_stripped() {
    assert_eq!(sanitize_source("```js\nctx.stroke();\n```").as_deref(), Some("ctx.stroke();"));
    assert_eq!(sanitize_source("```\nctx.fill();\n```\n").as_deref(), Some("ctx.fill();"));
}

#[test]
fn fences_in_the_middle_are_removed_too() {
    let raw = "const a = 1;\n```\nconst b = 2;";
    assert_eq!(sanitize_source(raw).as_deref(), Some("const a = 1;\n\nconst b = 2;"));
}

#[test]
fn empty_or_fence_only_source_is_rejected() {
    assert_eq!(sanitize_source(""), None);
    assert_eq!(sanitize_source("   \n\t"), None);
    assert_eq!(sanitize_source("```javascript\n```"), None);
}

// =============================================================
// AnimationProgram
// =============================================================

#[test]
fn closures_are_programs() {
    let mut seen = Vec::new();
    let mut program = |log: &mut Vec<(u32, u32, u64)>, w: u32, h: u32, f: u64| -> Result<(), ProgramFault> {
        log.push((w, h, f));
        Ok(())
    };
    program.draw_frame(&mut seen, 640, 480, 7).unwrap();
    assert_eq!(seen, vec![(640, 480, 7)]);
}

#[test]
fn boxed_program_reports_faults() {
    let mut program: Box<dyn AnimationProgram<()>> = Box::new(|_: &mut (), _: u32, _: u32, frame: u64| -> Result<(), ProgramFault> {
        Err(ProgramFault::Runtime(format!("bad frame {frame}")))
    });
    assert_eq!(program.draw_frame(&mut (), 1, 1, 2), Err(ProgramFault::Runtime("bad frame 2".into())));
}

// =============================================================
// ProgramId / ProgramFault
// =============================================================

#[test]
fn program_ids_are_unique() {
    assert_ne!(ProgramId::new(), ProgramId::new());
}

#[test]
fn program_id_displays_as_uuid() {
    let id = ProgramId::new();
    assert_eq!(id.to_string(), id.0.to_string());
}

#[test]
fn fault_messages() {
    assert_eq!(
        ProgramFault::Compile("Unexpected token".into()).to_string(),
        "program failed to compile: Unexpected token"
    );
    assert_eq!(
        ProgramFault::Runtime("x is not defined".into()).to_string(),
        "program failed while drawing: x is not defined"
    );
}

// =============================================================
// capability_factory_source
// =============================================================

#[test]
fn capability_lists_every_drawing_name() {
    let source = capability_factory_source();
    for name in DRAWING_METHODS.iter().chain(DRAWING_PROPERTIES.iter()) {
        assert!(source.contains(&format!("\"{name}\"")), "{name} missing from capability");
    }
}

#[test]
fn capability_never_exposes_the_canvas_element() {
    let names: Vec<&str> = DRAWING_METHODS.iter().chain(DRAWING_PROPERTIES.iter()).copied().collect();
    for forbidden in ["canvas", "getImageData", "putImageData", "drawImage", "createPattern", "getContextAttributes"] {
        assert!(!names.contains(&forbidden), "{forbidden} must not be granted");
    }
    assert!(!capability_factory_source().contains("\"canvas\""));
}

#[test]
fn capability_object_is_frozen_and_prototype_less() {
    let source = capability_factory_source();
    assert!(source.starts_with("\"use strict\";"));
    assert!(source.contains("Object.create(null)"));
    assert!(source.contains("Object.setPrototypeOf(f, null)"));
    assert!(source.trim_end().ends_with("return Object.freeze(api);"));
}

#[test]
fn capability_names_are_unique() {
    let mut names: Vec<&str> = DRAWING_METHODS.iter().chain(DRAWING_PROPERTIES.iter()).copied().collect();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
}

//! Stub compilers for exercising the pdflatex adapter without a TeX install.

use std::path::Path;

use super::PdfLatexCompiler;

/// Shared prelude for stub scripts.
///
/// Parses `-output-directory=` the way pdflatex does and provides a
/// `write_pdf` function that leaves the usual pdflatex files behind.
const PRELUDE: &str = r##"outdir=.
for arg in "$@"; do
  case "$arg" in
    -output-directory=*) outdir="${arg#-output-directory=}" ;;
  esac
done
write_pdf() {
  printf 'aux' > "$outdir/output.aux"
  printf 'log' > "$outdir/output.log"
  printf '%%PDF-1.4 stub' > "$outdir/output.pdf"
}
"##;

/// Compiler running a shell script with `body` in place of pdflatex.
///
/// The script is run through `sh` rather than executed directly so tests do
/// not race on freshly written executables.
pub(crate) fn stub_compiler(dir: &Path, body: &str) -> PdfLatexCompiler {
    let script = dir.join("stub-pdflatex.sh");
    std::fs::write(&script, format!("{}{}\n", PRELUDE, body)).unwrap();

    PdfLatexCompiler::new()
        .with_program("sh")
        .with_leading_args([script.display().to_string()])
        .with_timeout(10)
}

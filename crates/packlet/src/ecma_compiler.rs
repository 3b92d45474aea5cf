use std::path::Path;

use oxc::{
  allocator::Allocator,
  ast::ast::Statement,
  codegen::{Codegen, CodegenOptions},
  minifier::{Minifier, MinifierOptions},
  parser::Parser,
  semantic::SemanticBuilder,
  span::SourceType,
  transformer::{TransformOptions, Transformer},
};
use packlet_error::{BuildError, BuildResult};

pub struct CompileOptions<'a> {
  pub minify: bool,
  /// Path recorded as the map's source. No map is produced when `None`.
  pub source_map_path: Option<&'a Path>,
}

pub struct Emitted {
  pub code: String,
  pub map: Option<String>,
  /// Specifiers of the top-level static imports, in source order.
  pub imports: Vec<String>,
}

pub struct EcmaCompiler;

impl EcmaCompiler {
  /// Parses `source`, strips TypeScript and JSX syntax, and prints it back.
  pub fn compile(
    source: &str,
    source_path: &Path,
    source_type: SourceType,
    options: &CompileOptions,
  ) -> BuildResult<Emitted> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, source_type).parse();
    if !ret.errors.is_empty() {
      return Err(into_build_error(ret.errors));
    }

    let mut program = ret.program;
    let imports = program
      .body
      .iter()
      .filter_map(|stmt| match stmt {
        Statement::ImportDeclaration(decl) => Some(decl.source.value.to_string()),
        _ => None,
      })
      .collect();

    let (symbols, scopes) =
      SemanticBuilder::new().build(&program).semantic.into_symbol_table_and_scope_tree();
    let ret = Transformer::new(&allocator, source_path, &TransformOptions::default())
      .build_with_symbols_and_scopes(symbols, scopes, &mut program);
    if !ret.errors.is_empty() {
      return Err(into_build_error(ret.errors));
    }

    if options.minify {
      Minifier::new(MinifierOptions::default()).build(&allocator, &mut program);
    }

    let ret = Codegen::new()
      .with_options(CodegenOptions {
        minify: options.minify,
        source_map_path: options.source_map_path.map(Path::to_path_buf),
        ..CodegenOptions::default()
      })
      .build(&program);

    Ok(Emitted { code: ret.code, map: ret.map.map(|map| map.to_json_string()), imports })
  }
}

fn into_build_error<E: std::fmt::Display>(errors: Vec<E>) -> BuildError {
  errors.into_iter().map(|error| anyhow::anyhow!("{error}")).collect::<Vec<_>>().into()
}

//! Shared constants and regex patterns for the migration rules.

use regex::Regex;
use std::sync::OnceLock;

/// Literal substring whose presence means a file has already been migrated.
pub const MIGRATION_MARKER: &str = "E2ETestModule";

/// The exact single-symbol testing import removed by the first rule.
pub const SOLO_TESTING_IMPORT: &str = "import { Test } from '@nestjs/testing';";

/// The helper import line inserted after the application-module import.
pub const HELPER_IMPORT: &str =
    "import { E2ETestModule } from '../test-helpers/e2e-test-module';";

/// Module-specifier tail of the helper import, as inserted for files that
/// sit directly under `test/e2e/`.
pub const HELPER_IMPORT_FROM: &str = "from '../test-helpers/e2e-test-module';";

/// Module-specifier tail used for files one directory level deeper.
pub const HELPER_IMPORT_FROM_DEEP: &str = "from '../../test-helpers/e2e-test-module';";

/// Subdirectory whose spec files need one extra parent traversal in the
/// helper import path. Compared against separator-normalized paths.
pub const DEEP_SUITE_DIR: &str = "test/e2e/assessment/";

/// Replacement for the old multi-line bootstrap block. Binds the helper's
/// application handle to the same `app` local the rest of the file uses.
pub const BOOTSTRAP_REPLACEMENT: &str =
    "const { app: testApp } = await E2ETestModule.create([AppModule]);\n    app = testApp;";

/// The fixed suite of files a default run operates on, relative to the root.
pub const DEFAULT_SUITE_FILES: [&str; 8] = [
    "test/e2e/courses.e2e.spec.ts",
    "test/e2e/document.e2e.spec.ts",
    "test/e2e/lessons.e2e.spec.ts",
    "test/e2e/modules.e2e.spec.ts",
    "test/e2e/students.e2e.spec.ts",
    "test/e2e/tracks.e2e.spec.ts",
    "test/e2e/videos.e2e.spec.ts",
    "test/e2e/assessment/get-questions-detailed.e2e.spec.ts",
];

/// Regex for a multi-symbol testing import that lists `Test` first.
/// Group 1 captures the remaining symbols, whitespace included, so the
/// rewritten statement keeps its original formatting.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_multi_testing_import_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"import \{ Test,([^}]+)\} from '@nestjs/testing';")
            .expect("Invalid multi-symbol testing import regex")
    })
}

/// Regex for the application-module import line the helper import is
/// inserted after.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_app_module_import_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"import \{ AppModule \} from[^;]+;")
            .expect("Invalid application-module import regex")
    })
}

/// Regex for the old bootstrap block, middleware line included as an
/// optional segment. Dot-matches-newline so the whole multi-statement
/// construct is matched as one unit.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_bootstrap_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(
            r"(?s)const moduleRef = await Test\.createTestingModule\(\{\s*imports: \[AppModule\],?\s*\}\)\.compile\(\);\s*app = moduleRef\.createNestApplication\(\);\s*(?:app\.useGlobalPipes[^;]+;\s*)?await app\.init\(\);",
        )
        .expect("Invalid bootstrap block regex")
    })
}

/// Regex for the bootstrap variant without the middleware line.
/// Kept as a separate pattern so both known shapes are attempted in order.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_bootstrap_plain_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(
            r"(?s)const moduleRef = await Test\.createTestingModule\(\{\s*imports: \[AppModule\],?\s*\}\)\.compile\(\);\s*app = moduleRef\.createNestApplication\(\);\s*await app\.init\(\);",
        )
        .expect("Invalid plain bootstrap block regex")
    })
}

pub use get_app_module_import_re as APP_MODULE_IMPORT_RE;
pub use get_bootstrap_plain_re as BOOTSTRAP_PLAIN_RE;
pub use get_bootstrap_re as BOOTSTRAP_RE;
pub use get_multi_testing_import_re as MULTI_TESTING_IMPORT_RE;

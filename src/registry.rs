//! Static lookup tables for stack detection and template naming.
//!
//! All tables here are process-wide immutable configuration data: constant
//! ordered slices with lookup helpers. Nothing in this module changes after
//! load, so no interior mutability or lazy initialization is needed.
//!
//! ## Tables
//!
//! - [`DETECTION_MAP`]: marker file/directory name → stack identifiers
//! - [`GITHUB_TEMPLATE_MAP`]: stack identifier → GitHub template path
//! - [`VALID_API_STACKS`]: identifiers accepted by the gitignore.io API
//! - [`ALLOWED_HIDDEN`]: hidden entries the scanner must still report

/// Marker file/directory names mapped to the stacks they indicate.
///
/// A single marker can indicate more than one stack (e.g. `pom.xml` implies
/// both `java` and `maven`). Lookup is exact-name; suffix-based rules live in
/// the detector.
pub const DETECTION_MAP: &[(&str, &[&str])] = &[
    // Java & build tools
    ("pom.xml", &["java", "maven"]),
    ("build.gradle", &["gradle"]),
    ("build.gradle.kts", &["gradle"]),
    ("settings.gradle", &["gradle"]),
    ("settings.gradle.kts", &["gradle"]),
    ("gradlew", &["gradle"]),
    ("gradlew.bat", &["gradle"]),
    // Node.js
    ("package.json", &["node"]),
    ("yarn.lock", &["node", "yarn"]),
    // npm and pnpm are not valid API stacks; node covers both
    ("pnpm-lock.yaml", &["node"]),
    ("package-lock.json", &["node"]),
    ("node_modules", &["node"]),
    // Docker
    ("Dockerfile", &["docker"]),
    ("docker-compose.yml", &["docker"]),
    ("docker-compose.yaml", &["docker"]),
    (".dockerignore", &["docker"]),
    // Ruby
    ("Gemfile", &["ruby"]),
    ("Gemfile.lock", &["ruby"]),
    (".ruby-version", &["ruby"]),
    ("Rakefile", &["ruby"]),
    // Python
    ("requirements.txt", &["python"]),
    ("Pipfile", &["python"]),
    ("Pipfile.lock", &["python"]),
    ("pyproject.toml", &["python"]),
    ("setup.py", &["python"]),
    ("manage.py", &["python", "django"]),
    // IDEs
    (".idea", &["intellij"]),
    (".vscode", &["vscode"]),
    (".eclipse", &["eclipse"]),
    (".settings", &["eclipse"]),
    (".project", &["eclipse"]),
    (".classpath", &["eclipse"]),
    // Environment files
    (".env", &["dotenv"]),
    (".env.local", &["dotenv"]),
    (".env.development", &["dotenv"]),
    (".env.production", &["dotenv"]),
    // Go
    ("go.mod", &["go"]),
    ("go.sum", &["go"]),
    // Rust
    ("Cargo.toml", &["rust"]),
    ("Cargo.lock", &["rust"]),
    // PHP
    ("composer.json", &["php", "composer"]),
    ("composer.lock", &["php", "composer"]),
    // .NET
    (".csproj", &["visualstudio"]),
    (".sln", &["visualstudio"]),
    ("project.json", &["visualstudio"]),
];

/// Stack identifiers mapped to template names in the github/gitignore repo.
///
/// GitHub templates use PascalCase file names (`Node.gitignore`,
/// `Java.gitignore`); editor and tooling templates live under `Global/`.
pub const GITHUB_TEMPLATE_MAP: &[(&str, &str)] = &[
    ("node", "Node"),
    ("java", "Java"),
    ("maven", "Maven"),
    ("gradle", "Gradle"),
    ("ruby", "Ruby"),
    ("python", "Python"),
    ("django", "Django"),
    ("go", "Go"),
    ("rust", "Rust"),
    ("php", "PHP"),
    ("composer", "Composer"),
    ("visualstudio", "VisualStudio"),
    ("intellij", "Global/JetBrains"),
    ("vscode", "Global/VisualStudioCode"),
    ("eclipse", "Global/Eclipse"),
    ("dotenv", "Global/Env"),
    ("c", "C"),
    ("cpp", "C++"),
    ("csharp", "VisualStudio"),
    ("typescript", "TypeScript"),
    ("javascript", "JavaScript"),
    ("react", "React"),
    ("vue", "Vue"),
    ("angular", "Angular"),
    ("nextjs", "Nextjs"),
    ("nuxt", "Nuxt"),
    ("gatsby", "Gatsby"),
    ("svelte", "Svelte"),
    ("yarn", "Yarn"),
    ("flutter", "Flutter"),
    ("dart", "Dart"),
    ("kotlin", "Kotlin"),
    ("swift", "Swift"),
    ("scala", "Scala"),
    ("clojure", "Clojure"),
    ("elixir", "Elixir"),
    ("erlang", "Erlang"),
    ("haskell", "Haskell"),
    ("ocaml", "OCaml"),
    ("perl", "Perl"),
    ("r", "R"),
    ("matlab", "MATLAB"),
    ("julia", "Julia"),
    ("lua", "Lua"),
    ("nim", "Nim"),
    ("crystal", "Crystal"),
    ("zig", "Zig"),
    ("terraform", "Terraform"),
    ("ansible", "Ansible"),
    ("kubernetes", "Kubernetes"),
    ("helm", "Helm"),
    ("vagrant", "Vagrant"),
];

/// Stacks the gitignore.io API accepts.
///
/// Identifiers outside this list (like `npm`, `pnpm`, or `docker`) would make
/// the batched API call fail, so they are silently filtered before tier 2.
pub const VALID_API_STACKS: &[&str] = &[
    "node",
    "yarn",
    "java",
    "maven",
    "gradle",
    "ruby",
    "python",
    "django",
    "go",
    "rust",
    "php",
    "composer",
    "visualstudio",
    "intellij",
    "vscode",
    "eclipse",
    "dotenv",
    "c",
    "cpp",
    "csharp",
    "typescript",
    "javascript",
    "react",
    "vue",
    "angular",
    "nextjs",
    "nuxt",
    "gatsby",
    "svelte",
    "flutter",
    "dart",
    "kotlin",
    "swift",
    "scala",
    "clojure",
    "elixir",
    "erlang",
    "haskell",
    "ocaml",
    "perl",
    "r",
    "matlab",
    "julia",
    "lua",
    "nim",
    "crystal",
    "zig",
    "v",
    "terraform",
    "ansible",
    "kubernetes",
    "helm",
    "vagrant",
    "packer",
];

/// Hidden entries the scanner reports despite the leading dot.
///
/// These are exactly the hidden markers the detection map keys on.
pub const ALLOWED_HIDDEN: &[&str] = &[
    ".env",
    ".env.local",
    ".env.development",
    ".env.production",
    ".idea",
    ".vscode",
    ".dockerignore",
    ".ruby-version",
    ".eclipse",
    ".settings",
    ".project",
    ".classpath",
];

/// Looks up the stacks indicated by a marker file or directory name.
#[must_use]
pub fn stacks_for_marker(name: &str) -> Option<&'static [&'static str]> {
    DETECTION_MAP
        .iter()
        .find(|(marker, _)| *marker == name)
        .map(|(_, stacks)| *stacks)
}

/// Looks up the GitHub template path for a stack identifier.
#[must_use]
pub fn github_template_name(stack: &str) -> Option<&'static str> {
    GITHUB_TEMPLATE_MAP
        .iter()
        .find(|(id, _)| *id == stack)
        .map(|(_, name)| *name)
}

/// Returns true if the gitignore.io API accepts this stack identifier.
#[must_use]
pub fn is_valid_api_stack(stack: &str) -> bool {
    VALID_API_STACKS.contains(&stack)
}

/// Returns true if a hidden entry should still be reported by the scanner.
#[must_use]
pub fn is_allowed_hidden(name: &str) -> bool {
    ALLOWED_HIDDEN.contains(&name)
}

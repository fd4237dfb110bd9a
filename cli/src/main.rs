mod cli;
mod os;
mod steps;

use os::OsEnv;
use picoforge::{Build, Environment, Picoforge, probe};
use steps::Steps;

fn main() -> anyhow::Result<()> {
    let args = cli::parse();

    let mut forge = Picoforge::new(OsEnv, Steps);
    forge.option("prefix", args.prefix.as_str());
    if let Some(mode) = &args.mode {
        forge.option("mode", mode.as_str());
    }
    for define in &args.define {
        forge.option(define.key.as_str(), define.value.as_str());
    }

    let build = forge.configure(Environment::default())?;
    print_summary(&build);

    let database = forge.probe(probe::DATABASE_PACKAGES);
    println!("libpq cflags:   {}", database.cflags);
    println!("libpq libs:     {}", database.libs);

    Ok(())
}

fn print_summary(build: &Build) {
    let env = build.environment();
    let paths = build.install_paths();

    println!("platform:       {:?}", build.platform());
    println!("cc:             {}", env.cc);
    println!("cxx:            {}", env.cxx);
    println!("cc flags:       {}", env.cc_flags.join(" "));
    println!("c flags:        {}", env.c_flags.join(" "));
    println!("cxx flags:      {}", env.cxx_flags.join(" "));
    println!("cpp flags:      {}", env.cpp_flags.join(" "));
    let includes: Vec<&str> = env.include_paths.iter().map(AsRef::as_ref).collect();
    println!("include paths:  {}", includes.join(" "));
    println!("link flags:     {}", env.link_flags.join(" "));
    println!("shared link:    {}", env.shared_link_flags.join(" "));
    println!("prefix:         {}", paths.prefix);
    println!("libdir:         {}", paths.libdir);
    println!("bindir:         {}", paths.bindir);
    println!("includedir:     {}", paths.includedir);
}

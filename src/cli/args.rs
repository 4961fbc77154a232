// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs, Debug, Default)]
/// casemerge - Merge security test cases into the master test-case CSV
pub struct Args {
    /// csv file whose rows are merged (default: docs/phase4-testing/SECURITY_TEST_CASES.csv)
    #[argh(option)]
    pub source: Option<String>,

    /// master CSV file to create or append to (default: X4O_Test_Cases.csv)
    #[argh(option)]
    pub destination: Option<String>,

    /// validate inputs and report what would change without writing anything
    #[argh(switch)]
    pub dry_run: bool,

    /// print the merge summary as JSON instead of progress text
    #[argh(switch)]
    pub json: bool,

    /// enable debug diagnostics on stderr
    #[argh(switch, short = 'v')]
    pub verbose: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}

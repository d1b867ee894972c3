use structopt::StructOpt;

macro_rules! assert_match {
    ($a:expr => $b:pat) => {
        assert!(match $a {
            $b => true,
            _ => false,
        });
    };
}

#[test]
fn run_with_no_args() {
    let args = [""];
    let res = chefcli::Opt::from_iter_safe(&args);
    assert_match!(res => Err(_));
}

#[test]
fn parse_problem_cmd() {
    let res = chefcli::Opt::from_iter_safe(&["chefcli", "problem", "WEICOM"]);
    assert_match!(res => Ok(_));
}

#[test]
fn parse_submit_cmd() {
    let res =
        chefcli::Opt::from_iter_safe(&["chefcli", "submit", "WEICOM", "solution.py", "python3"]);
    assert_match!(res => Ok(_));

    // missing language
    let res = chefcli::Opt::from_iter_safe(&["chefcli", "submit", "WEICOM", "solution.py"]);
    assert_match!(res => Err(_));
}

#[test]
fn parse_solutions_filters() {
    let res = chefcli::Opt::from_iter_safe(&[
        "chefcli",
        "solutions",
        "WEICOM",
        "--page",
        "2",
        "--result",
        "WA",
        "--username",
        "abcd",
    ]);
    assert_match!(res => Ok(_));

    let res = chefcli::Opt::from_iter_safe(&["chefcli", "solutions", "WEICOM", "--result", "XX"]);
    assert_match!(res => Err(_));
}

#[test]
fn parse_global_sort_flags() {
    let res = chefcli::Opt::from_iter_safe(&[
        "chefcli", "ratings", "--sort", "RATING", "--order", "desc",
    ]);
    assert_match!(res => Ok(_));

    let res = chefcli::Opt::from_iter_safe(&["chefcli", "ratings", "--order", "sideways"]);
    assert_match!(res => Err(_));
}

#[test]
fn parse_search_category() {
    let res = chefcli::Opt::from_iter_safe(&["chefcli", "search", "easy"]);
    assert_match!(res => Ok(_));

    let res = chefcli::Opt::from_iter_safe(&["chefcli", "search", "impossible"]);
    assert_match!(res => Err(_));
}

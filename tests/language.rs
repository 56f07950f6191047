use std::fs;

use mk::interpret;
use walkdir::WalkDir;

fn eval_display(source: &str) -> String {
    match interpret(source) {
        Ok(value) => value.to_string(),
        Err(error) => panic!("Script failed: {error}\nSource: {source}"),
    }
}

fn eval_error(source: &str) -> String {
    match interpret(source) {
        Ok(value) => panic!("Script succeeded with `{value}` but was expected to fail: {source}"),
        Err(error) => error.to_string(),
    }
}

#[test]
fn script_files_produce_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "mk"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("expected");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                           panic!("Failed to read {expected_path:?}: {e}")
                       });

        count += 1;
        match interpret(&source) {
            Ok(value) => assert_eq!(value.to_string(), expected.trim(), "script {path:?}"),
            Err(error) => panic!("Script {path:?} failed:\n{source}\nError: {error}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

#[test]
fn integer_arithmetic() {
    assert_eq!(eval_display("5"), "5");
    assert_eq!(eval_display("-5"), "-5");
    assert_eq!(eval_display("--5"), "5");
    assert_eq!(eval_display("5 + 5 + 5 + 5 - 10"), "10");
    assert_eq!(eval_display("2 * 2 * 2 * 2 * 2"), "32");
    assert_eq!(eval_display("50 / 2 * 2 + 10"), "60");
    assert_eq!(eval_display("3 * (3 * 3) + 10"), "37");
    assert_eq!(eval_display("-7 / 2"), "-3");
    assert_eq!(eval_display("let a = 1 + 2 + 3 * 4 * (5 + 6); a"), "135");
}

#[test]
fn comparison_and_equality() {
    assert_eq!(eval_display("1 < 2"), "true");
    assert_eq!(eval_display("1 > 2"), "false");
    assert_eq!(eval_display("1 == 1"), "true");
    assert_eq!(eval_display("1 != 2"), "true");
    assert_eq!(eval_display("true == true"), "true");
    assert_eq!(eval_display("false != true"), "true");
    assert_eq!(eval_display("(1 < 2) == true"), "true");
}

#[test]
fn equality_falls_back_to_identity() {
    assert_eq!(eval_display("1 == true"), "false");
    assert_eq!(eval_display("let a = [1]; a == a"), "true");
    assert_eq!(eval_display("[1] == [1]"), "false");
    assert_eq!(eval_display("let f = fn(x) { x }; f == f"), "true");
    // `if` without a taken branch produces null, the only way to spell it.
    assert_eq!(eval_display("let n = if (false) { 1 }; n == n"), "true");
}

#[test]
fn bang_operator_follows_truthiness() {
    assert_eq!(eval_display("!true"), "false");
    assert_eq!(eval_display("!false"), "true");
    assert_eq!(eval_display("!5"), "false");
    assert_eq!(eval_display("!!5"), "true");
    assert_eq!(eval_display("!if (false) { 1 }"), "true");
}

#[test]
fn if_expressions() {
    assert_eq!(eval_display("if (true) { 10 }"), "10");
    assert_eq!(eval_display("if (false) { 10 }"), "null");
    assert_eq!(eval_display("if (1) { 10 }"), "10");
    assert_eq!(eval_display("if (0) { 10 } else { 20 }"), "10");
    assert_eq!(eval_display("if (1 > 2) { 10 } else { 20 }"), "20");
    assert_eq!(eval_display("if (!false) { 10 } else { 20 }"), "10");
}

#[test]
fn return_statements_unwrap_at_program_scope() {
    assert_eq!(eval_display("return 10;"), "10");
    assert_eq!(eval_display("return 10; 9"), "10");
    assert_eq!(eval_display("return 2 * 5; 9"), "10");
    assert_eq!(eval_display("9; return 10; 9"), "10");
}

#[test]
fn nested_return_escapes_every_block() {
    let source = "if (10 > 1) {
                      if (10 > 1) {
                          return 10;
                      }
                      return 1;
                  }";
    assert_eq!(eval_display(source), "10");
}

#[test]
fn let_bindings() {
    assert_eq!(eval_display("let a = 5; a"), "5");
    assert_eq!(eval_display("let a = 5 * 5; a"), "25");
    assert_eq!(eval_display("let a = 5; let b = a; b"), "5");
    assert_eq!(eval_display("let a = 5; let b = a; let c = a + b + 5; c"), "15");
    // The statement's own value is the bound value.
    assert_eq!(eval_display("let a = 41"), "41");
}

#[test]
fn empty_program_is_null() {
    assert_eq!(eval_display(""), "null");
}

#[test]
fn functions_and_calls() {
    assert_eq!(eval_display("let identity = fn(x) { x }; identity(5)"), "5");
    assert_eq!(eval_display("let identity = fn(x) { return x; }; identity(5)"), "5");
    assert_eq!(eval_display("let double = fn(x) { x * 2 }; double(5)"), "10");
    assert_eq!(eval_display("let add = fn(x, y) { x + y }; add(5, add(5, 5))"), "15");
    assert_eq!(eval_display("fn(x) { x }(5)"), "5");
}

#[test]
fn closures_capture_their_defining_environment() {
    let source = "let c = fn(x) { fn(y) { x + y } };
                  let a = c(2);
                  a(3)";
    assert_eq!(eval_display(source), "5");
}

#[test]
fn closures_see_later_rebindings() {
    // A rebinding replaces the entry in the shared environment, so the
    // closure observes it.
    let source = "let x = 5; let f = fn() { x }; let x = 10; f()";
    assert_eq!(eval_display(source), "10");
}

#[test]
fn higher_order_functions() {
    let source = "let twice = fn(f, x) { f(f(x)) };
                  twice(fn(x) { x + 1 }, 5)";
    assert_eq!(eval_display(source), "7");
}

#[test]
fn recursion_terminates() {
    let source = "let fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } };
                  fib(10)";
    assert_eq!(eval_display(source), "55");
}

#[test]
fn strings() {
    assert_eq!(eval_display("\"Hello, \" + \"world\""), "Hello, world");
    assert_eq!(eval_display("\"a\" + \"b\" + \"c\""), "abc");
    assert_eq!(eval_display("len(\"hello\")"), "5");
    assert_eq!(eval_display("len(\"\")"), "0");
}

#[test]
fn arrays() {
    assert_eq!(eval_display("[1, 2 * 2, 3 + 3]"), "[1, 4, 6]");
    assert_eq!(eval_display("[1, 2, 3][0]"), "1");
    assert_eq!(eval_display("let i = 2; [1, 2, 3][i]"), "3");
    assert_eq!(eval_display("[1, 2, 3][1 + 1]"), "3");
    assert_eq!(eval_display("let b = [1, 2, 3, 4, fn(x) { return x; }, 5, 6, 7]; b[4](5)"), "5");
}

#[test]
fn array_index_out_of_range_is_null() {
    assert_eq!(eval_display("[1, 2, 3][3]"), "null");
    assert_eq!(eval_display("[1, 2, 3][-1]"), "null");
    assert_eq!(eval_display("[][0]"), "null");
}

#[test]
fn hashes() {
    assert_eq!(eval_display("{\"name\": \"mk\"}[\"name\"]"), "mk");
    assert_eq!(eval_display("{1: \"one\"}[1]"), "one");
    assert_eq!(eval_display("{true: \"yes\", false: \"no\"}[1 > 2]"), "no");
    assert_eq!(eval_display("let key = \"k\"; {key: 5}[key]"), "5");
    assert_eq!(eval_display("{\"k\": 5}[\"missing\"]"), "null");
    assert_eq!(eval_display("{}[0]"), "null");
    // Keys are expressions; later duplicates overwrite earlier ones.
    assert_eq!(eval_display("{1 + 1: \"two\"}[2]"), "two");
    assert_eq!(eval_display("{1: \"a\", 1: \"b\"}[1]"), "b");
    let source = "let c = {11: \"11\", 22: \"22\", 11 + 22: \"33\", 44: [1, 2, 3, 4, 5]}; c[44]";
    assert_eq!(eval_display(source), "[1, 2, 3, 4, 5]");
}

#[test]
fn array_builtins() {
    assert_eq!(eval_display("len([1, 2, 3])"), "3");
    assert_eq!(eval_display("len([])"), "0");
    assert_eq!(eval_display("len({1: 2, 3: 4})"), "2");
    assert_eq!(eval_display("first([1, 2, 3])"), "1");
    assert_eq!(eval_display("first([])"), "null");
    assert_eq!(eval_display("last([1, 2, 3])"), "3");
    assert_eq!(eval_display("last([])"), "null");
    assert_eq!(eval_display("rest([1, 2, 3])"), "[2, 3]");
    assert_eq!(eval_display("rest([1])"), "[]");
    assert_eq!(eval_display("rest([])"), "null");
    assert_eq!(eval_display("push([], 1)"), "[1]");
    assert_eq!(eval_display("push([1], [2])"), "[1, [2]]");
    // push copies; the original stays untouched.
    assert_eq!(eval_display("let a = [1]; let b = push(a, 2); a"), "[1]");
}

#[test]
fn map_over_array_via_recursion() {
    let source = "let map = fn(arr, f) {
                      let iter = fn(arr, acc) {
                          if (len(arr) == 0) {
                              return acc;
                          } else {
                              return iter(rest(arr), push(acc, f(first(arr))));
                          }
                      };
                      return iter(arr, []);
                  };
                  map([1, 2, 3, 4, 5], fn(x) { return x * 2; })";
    assert_eq!(eval_display(source), "[2, 4, 6, 8, 10]");
}

#[test]
fn puts_returns_null() {
    assert_eq!(eval_display("puts(\"test output\")"), "null");
    assert_eq!(eval_display("puts()"), "null");
}

#[test]
fn now_has_the_documented_shape() {
    // YYYY-MM-DD HH:MM:SS
    assert_eq!(eval_display("len(now())"), "19");
}

#[test]
fn builtins_can_be_shadowed() {
    assert_eq!(eval_display("let len = 5; len"), "5");
    assert_eq!(eval_error("let len = 5; len([1])"), "ERROR: not a function INTEGER");
}

#[test]
fn function_display_form() {
    assert_eq!(eval_display("fn(x, y) { x + y; }"), "fn(x, y) {\n(x + y)\n}");
}

#[test]
fn builtin_display_form() {
    assert_eq!(eval_display("len"), "builtin funciton");
}

#[test]
fn runtime_errors() {
    assert_eq!(eval_error("5 + true;"), "ERROR: unknown operator: INTEGER + BOOLEAN");
    assert_eq!(eval_error("5 + true; 5;"), "ERROR: unknown operator: INTEGER + BOOLEAN");
    assert_eq!(eval_error("-true"), "ERROR: unknown operator: -BOOLEAN");
    assert_eq!(eval_error("true + false"), "ERROR: unknown operator: BOOLEAN + BOOLEAN");
    assert_eq!(eval_error("\"a\" - \"b\""), "ERROR: unknown operator: STRING - STRING");
    assert_eq!(eval_error("\"a\" == \"a\""), "ERROR: unknown operator: STRING == STRING");
    assert_eq!(eval_error("foobar"), "ERROR: idenfier not found: foobar");
    assert_eq!(eval_error("5(1)"), "ERROR: not a function INTEGER");
    assert_eq!(eval_error("1 / 0"), "ERROR: division by zero");
    assert_eq!(eval_error("true[0]"), "ERROR: index operator not supported: BOOLEAN");
}

#[test]
fn errors_escape_nested_scopes() {
    let source = "if (10 > 1) {
                      if (10 > 1) {
                          return true + false;
                      }
                      return 1;
                  }";
    assert_eq!(eval_error(source), "ERROR: unknown operator: BOOLEAN + BOOLEAN");
}

#[test]
fn error_in_argument_aborts_the_call() {
    assert_eq!(eval_error("len(foobar)"), "ERROR: idenfier not found: foobar");
    assert_eq!(eval_error("[1, foobar, 3]"), "ERROR: idenfier not found: foobar");
}

#[test]
fn builtin_errors() {
    assert_eq!(eval_error("len(1)"), "ERROR: argument to `len` not supported, got=INTEGER");
    assert_eq!(eval_error("len(\"a\", \"b\")"), "ERROR: wrong number of arguments. got=2, want=1");
    assert_eq!(eval_error("first(1)"), "ERROR: argument to `first` must be ARRAY, got INTEGER");
    assert_eq!(eval_error("last(\"x\")"), "ERROR: argument to `last` must be ARRAY, got STRING");
    assert_eq!(eval_error("rest(1)"), "ERROR: argument to `rest` must be ARRAY, got INTEGER");
    assert_eq!(eval_error("push(1, 1)"), "ERROR: argument to `push` must be ARRAY, got INTEGER");
    assert_eq!(eval_error("now(1)"), "ERROR: wrong number of arguments. got=1, want=0");
}

#[test]
fn user_function_arity_is_checked() {
    assert_eq!(eval_error("let f = fn(x) { x }; f(1, 2)"),
               "ERROR: wrong number of arguments. got=2, want=1");
    assert_eq!(eval_error("let f = fn(x, y) { x + y }; f(1)"),
               "ERROR: wrong number of arguments. got=1, want=2");
}

#[test]
fn hash_key_errors() {
    assert_eq!(eval_error("{fn(x) { x }: 1}"), "ERROR: unusable as hash key: FUNCTION");
    assert_eq!(eval_error("{[1]: 1}"), "ERROR: unusable as hash key: ARRAY");
    assert_eq!(eval_error("{1: 1}[fn(x) { x }]"), "ERROR: unusable as hash key: FUNCTION");
}

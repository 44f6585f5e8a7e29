/*!
# Introduction

Four small exercises for getting comfortable with counted loops.
Each one runs a single loop over fixed values and prints its result.

Run them all with no arguments. The output is the same every time.
```text
$ drills
Iteration is: 1
...
5 * 10 = 50
```

Name drills to run only those, in the order given.
```text
$ drills table range
```

Use `drills --list` to see the names. Typing CTRL-C stops the
current drill and prints `BREAK`. Nothing after it runs.

Logging goes to stderr and is quiet by default. Use `-v` or set
`RUST_LOG=debug` to watch drills start and finish.
*/

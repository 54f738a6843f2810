// Entry point for the timing tests
//
// All actual tests are organized in submodules under tests/constant_time/
